#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::Vec2;
    use crate::animation::*;
    use crate::signal::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| {
            seen_clone.borrow_mut().push(*v);
        });

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);
    }

    #[test]
    fn test_signal_subscriber_may_read() {
        // Render callbacks read state from inside notifications; that must
        // not trip the interior borrow.
        let sig = signal(1.0f32);
        let mirror = signal(0.0f32);

        let src = sig.clone();
        let dst = mirror.clone();
        sig.subscribe(move |_| {
            let v = src.get();
            assert!(v > 0.0);
            let _ = dst.get();
        });

        sig.set(7.0);
        assert_eq!(sig.get(), 7.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_interpolate_endpoints() {
        let a = Color(0, 0, 0, 255);
        let b = Color(200, 100, 50, 255);
        assert_eq!(a.interpolate(&b, 0.0), a);
        assert_eq!(a.interpolate(&b, 1.0), b);
        assert_eq!(a.interpolate(&b, 0.5), Color(100, 50, 25, 255));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.inset(8.0), Rect::new(8.0, 8.0, 84.0, 24.0));

        // Over-inset collapses instead of inverting.
        let tiny = rect.inset(60.0);
        assert_eq!(tiny.w, 0.0);
        assert!(tiny.h >= 0.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((e.interpolate(0.0)).abs() < 1e-6);
            assert!((e.interpolate(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        set_clock(Box::new(TestClock { t: t0 }));

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);

        // Re-installing the clock must take effect (the slot is replaceable).
        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_millis(250),
        }));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        set_clock(Box::new(TestClock {
            t: t0 + Duration::from_millis(1000),
        }));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }
}
