mod tests {
    use core::cell::RefCell;

    use embassy_time::{Duration, Instant};
    use embedded_hal::delay::DelayNs;
    use hygro_indicator::color::{COLOR_BLUE, COLOR_CYAN, COLOR_ORANGE, COLOR_PINK, COLOR_RED, Color};
    use hygro_indicator::controller::{Controller, ControllerConfig};
    use hygro_indicator::display::{BUZZER_ON_DUTY, Buzzer, Display, PwmOutput, RgbOutput};
    use hygro_indicator::override_state::{ColorOverride, OverrideColor};
    use hygro_indicator::sensor::{HumiditySensor, Reading, SensorError};

    struct ScriptedSensor<'a> {
        script: &'a RefCell<Vec<Result<Reading, SensorError>>>,
    }

    impl HumiditySensor for ScriptedSensor<'_> {
        fn measure(&mut self) -> Result<Reading, SensorError> {
            self.script.borrow_mut().remove(0)
        }
    }

    struct RecordingRgb<'a> {
        writes: &'a RefCell<Vec<Color>>,
    }

    impl RgbOutput for RecordingRgb<'_> {
        fn set_channels(&mut self, color: Color) {
            self.writes.borrow_mut().push(color);
        }
    }

    struct RecordingPwm<'a> {
        duties: &'a RefCell<Vec<u16>>,
    }

    impl PwmOutput for RecordingPwm<'_> {
        fn set_duty(&mut self, duty: u16) {
            self.duties.borrow_mut().push(duty);
        }
    }

    struct RecordingDelay<'a> {
        waits_ns: &'a RefCell<Vec<u32>>,
    }

    impl DelayNs for RecordingDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.waits_ns.borrow_mut().push(ns);
        }
    }

    struct Bench {
        script: RefCell<Vec<Result<Reading, SensorError>>>,
        writes: RefCell<Vec<Color>>,
        duties: RefCell<Vec<u16>>,
        waits_ns: RefCell<Vec<u32>>,
    }

    impl Bench {
        fn new(script: Vec<Result<Reading, SensorError>>) -> Self {
            Self {
                script: RefCell::new(script),
                writes: RefCell::new(Vec::new()),
                duties: RefCell::new(Vec::new()),
                waits_ns: RefCell::new(Vec::new()),
            }
        }

        fn controller<'a>(
            &'a self,
            overrides: &'a ColorOverride,
        ) -> Controller<'a, ScriptedSensor<'a>, RecordingRgb<'a>, RecordingPwm<'a>, RecordingDelay<'a>>
        {
            let display = Display::new(
                RecordingRgb {
                    writes: &self.writes,
                },
                RecordingDelay {
                    waits_ns: &self.waits_ns,
                },
            );
            let buzzer = Buzzer::new(RecordingPwm {
                duties: &self.duties,
            });
            Controller::new(
                ScriptedSensor {
                    script: &self.script,
                },
                display,
                buzzer,
                overrides,
            )
        }
    }

    fn reading(humidity: f32) -> Result<Reading, SensorError> {
        Ok(Reading {
            humidity,
            temperature: 21.5,
        })
    }

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_humidity_drives_color_and_buzzer_off() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![reading(45.0)]);
        let mut controller = bench.controller(&overrides);

        let outcome = controller.tick(at(0));

        assert_eq!(outcome.rendered, Some(COLOR_BLUE));
        assert_eq!(outcome.alert, Some(false));
        assert_eq!(*bench.writes.borrow(), vec![COLOR_BLUE]);
        assert_eq!(*bench.duties.borrow(), vec![0]);
    }

    #[test]
    fn test_buzzer_threshold_is_inclusive() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![reading(79.9), reading(80.0)]);
        let mut controller = bench.controller(&overrides);

        let under = controller.tick(at(0));
        assert_eq!(under.rendered, Some(COLOR_ORANGE));
        assert_eq!(under.alert, Some(false));

        let over = controller.tick(at(2000));
        assert_eq!(over.rendered, Some(COLOR_RED));
        assert_eq!(over.alert, Some(true));

        assert_eq!(*bench.duties.borrow(), vec![0, BUZZER_ON_DUTY]);
    }

    #[test]
    fn test_active_override_supersedes_humidity() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![reading(45.0), reading(45.0), reading(45.0)]);
        let mut controller = bench.controller(&overrides);

        overrides.try_activate(OverrideColor::Cyan, at(0));

        // Override shown before expiry, still shown on the expiring
        // frame, then back to the humidity color.
        assert_eq!(controller.tick(at(100)).rendered, Some(COLOR_CYAN));
        assert_eq!(controller.tick(at(2100)).rendered, Some(COLOR_CYAN));
        assert_eq!(controller.tick(at(4100)).rendered, Some(COLOR_BLUE));
    }

    #[test]
    fn test_override_does_not_mute_buzzer() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![reading(92.0)]);
        let mut controller = bench.controller(&overrides);

        overrides.try_activate(OverrideColor::Pink, at(0));
        let outcome = controller.tick(at(100));

        assert_eq!(outcome.rendered, Some(COLOR_PINK));
        assert_eq!(outcome.alert, Some(true));
        assert_eq!(*bench.duties.borrow(), vec![BUZZER_ON_DUTY]);
    }

    #[test]
    fn test_failed_read_skips_render_and_buzzer() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![
            Err(SensorError::BusTimeout),
            Err(SensorError::ChecksumMismatch),
            reading(55.0),
        ]);
        let mut controller = bench.controller(&overrides);

        let failed = controller.tick(at(0));
        assert_eq!(failed.rendered, None);
        assert_eq!(failed.alert, None);
        // The cycle still sleeps its full interval.
        assert_eq!(failed.sleep_duration, Duration::from_millis(2000));

        controller.tick(at(2000));
        assert!(bench.writes.borrow().is_empty());
        assert!(bench.duties.borrow().is_empty());
        assert!(bench.waits_ns.borrow().is_empty());

        // The next scheduled cycle recovers on its own.
        let recovered = controller.tick(at(4000));
        assert_eq!(recovered.alert, Some(false));
        assert_eq!(bench.writes.borrow().len(), 1);
    }

    #[test]
    fn test_render_blocks_for_settle_pause() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![reading(45.0)]);
        let mut controller = bench.controller(&overrides);

        controller.tick(at(0));

        let waits = bench.waits_ns.borrow();
        assert_eq!(waits.len(), 1);
        assert_eq!(u64::from(waits[0]), 500 * 1_000_000);
    }

    #[test]
    fn test_custom_config() {
        let overrides = ColorOverride::new();
        let bench = Bench::new(vec![reading(60.0)]);
        let config = ControllerConfig {
            alert_threshold: 60.0,
            cycle_interval: Duration::from_millis(500),
        };
        let display = Display::new(
            RecordingRgb {
                writes: &bench.writes,
            },
            RecordingDelay {
                waits_ns: &bench.waits_ns,
            },
        );
        let buzzer = Buzzer::new(RecordingPwm {
            duties: &bench.duties,
        });
        let sensor = ScriptedSensor {
            script: &bench.script,
        };
        let mut controller = Controller::with_config(sensor, display, buzzer, &overrides, config);
        assert_eq!(controller.config().cycle_interval, Duration::from_millis(500));

        let outcome = controller.tick(at(0));
        assert_eq!(outcome.alert, Some(true));
        assert_eq!(outcome.sleep_duration, controller.config().cycle_interval);
    }
}
