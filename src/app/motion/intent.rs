//! Typed animation-intent descriptors.
//!
//! Every motion effect on the page is one of these variants. Components never
//! hand raw keyframe maps to the engine; they pick an intent and parameterize
//! it, and the engine compiles the intent to Web Animations keyframes. This
//! keeps the choice of underlying animation machinery an implementation
//! detail behind one interface.

/// Which side an entrance slide starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrom {
    Left,
    Right,
}

impl SlideFrom {
    /// Alternating reveal direction by element index: even from the left,
    /// odd from the right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            SlideFrom::Left
        } else {
            SlideFrom::Right
        }
    }

    fn sign(self) -> f64 {
        match self {
            SlideFrom::Left => -1.0,
            SlideFrom::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutQuad,
    OutExpo,
    OutBack,
    InOutSine,
}

impl Easing {
    /// CSS easing equivalent of the named curve.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::OutQuad => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::OutExpo => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::OutBack => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Easing::InOutSine => "cubic-bezier(0.37, 0, 0.63, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Play once and hold the final keyframe.
    Once,
    /// Loop forever, alternating direction each iteration.
    Mirror,
}

/// Closed set of animation intents used across the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Fade in while rising from `rise_px` below the resting position.
    EntranceFade {
        rise_px: f64,
        duration_ms: f64,
        delay_ms: f64,
    },
    /// Scale up from small with a slight overshoot.
    EntrancePop { duration_ms: f64, delay_ms: f64 },
    /// Slide in horizontally from one side.
    EntranceSlide {
        from: SlideFrom,
        distance_px: f64,
        duration_ms: f64,
        delay_ms: f64,
    },
    /// Per-character mask reveal: rise from below the baseline.
    CharRise {
        rise_pct: f64,
        duration_ms: f64,
        delay_ms: f64,
    },
    /// Hover enter: scale up and lift.
    HoverLift {
        scale: f64,
        lift_px: f64,
        duration_ms: f64,
    },
    /// Hover leave: settle back to the resting transform.
    HoverSettle { duration_ms: f64 },
    /// Ambient vertical oscillation, independent of scroll.
    ContinuousFloat { amplitude_px: f64, period_ms: f64 },
    /// Grow horizontally from zero width (underlines).
    GrowX { duration_ms: f64, delay_ms: f64 },
}

/// One compiled keyframe: CSS property name → value.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub props: Vec<(&'static str, String)>,
}

fn kf(props: &[(&'static str, &str)]) -> Keyframe {
    Keyframe {
        props: props
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect(),
    }
}

/// Compiled form of an [`Intent`], ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSpec {
    pub keyframes: Vec<Keyframe>,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Some intents only make sense anchored to an edge (underline growth).
    pub transform_origin: Option<&'static str>,
}

impl Intent {
    /// True for intents whose animation never finishes and keeps writing the
    /// target's transform. Such an intent and a scroll scrub must not share
    /// a target: while the animation runs, its effect value replaces inline
    /// style writes, so the scrub would never render.
    pub fn holds_transform_open_ended(&self) -> bool {
        self.spec().repeat == Repeat::Mirror
    }

    pub fn spec(&self) -> MotionSpec {
        match *self {
            Intent::EntranceFade {
                rise_px,
                duration_ms,
                delay_ms,
            } => MotionSpec {
                keyframes: vec![
                    kf(&[
                        ("opacity", "0"),
                        ("transform", &format!("translateY({rise_px}px)")),
                    ]),
                    kf(&[("opacity", "1"), ("transform", "translateY(0px)")]),
                ],
                duration_ms,
                delay_ms,
                easing: Easing::OutExpo,
                repeat: Repeat::Once,
                transform_origin: None,
            },
            Intent::EntrancePop {
                duration_ms,
                delay_ms,
            } => MotionSpec {
                keyframes: vec![
                    kf(&[("opacity", "0"), ("transform", "scale(0.6)")]),
                    kf(&[("opacity", "1"), ("transform", "scale(1)")]),
                ],
                duration_ms,
                delay_ms,
                easing: Easing::OutBack,
                repeat: Repeat::Once,
                transform_origin: None,
            },
            Intent::EntranceSlide {
                from,
                distance_px,
                duration_ms,
                delay_ms,
            } => MotionSpec {
                keyframes: vec![
                    kf(&[
                        ("opacity", "0"),
                        (
                            "transform",
                            &format!("translateX({}px)", from.sign() * distance_px),
                        ),
                    ]),
                    kf(&[("opacity", "1"), ("transform", "translateX(0px)")]),
                ],
                duration_ms,
                delay_ms,
                easing: Easing::OutExpo,
                repeat: Repeat::Once,
                transform_origin: None,
            },
            Intent::CharRise {
                rise_pct,
                duration_ms,
                delay_ms,
            } => MotionSpec {
                keyframes: vec![
                    kf(&[
                        ("opacity", "0"),
                        ("transform", &format!("translateY({rise_pct}%)")),
                    ]),
                    kf(&[("opacity", "1"), ("transform", "translateY(0%)")]),
                ],
                duration_ms,
                delay_ms,
                easing: Easing::OutBack,
                repeat: Repeat::Once,
                transform_origin: None,
            },
            Intent::HoverLift {
                scale,
                lift_px,
                duration_ms,
            } => MotionSpec {
                // single keyframe: animate from wherever the element is now
                keyframes: vec![kf(&[(
                    "transform",
                    &format!("scale({scale}) translateY({}px)", -lift_px),
                )])],
                duration_ms,
                delay_ms: 0.0,
                easing: Easing::OutQuad,
                repeat: Repeat::Once,
                transform_origin: None,
            },
            Intent::HoverSettle { duration_ms } => MotionSpec {
                keyframes: vec![kf(&[("transform", "scale(1) translateY(0px)")])],
                duration_ms,
                delay_ms: 0.0,
                easing: Easing::OutQuad,
                repeat: Repeat::Once,
                transform_origin: None,
            },
            Intent::ContinuousFloat {
                amplitude_px,
                period_ms,
            } => MotionSpec {
                keyframes: vec![
                    kf(&[("transform", "translateY(0px)")]),
                    kf(&[("transform", &format!("translateY({}px)", -amplitude_px))]),
                ],
                // a mirrored iteration covers half the oscillation period
                duration_ms: period_ms / 2.0,
                delay_ms: 0.0,
                easing: Easing::InOutSine,
                repeat: Repeat::Mirror,
                transform_origin: None,
            },
            Intent::GrowX {
                duration_ms,
                delay_ms,
            } => MotionSpec {
                keyframes: vec![
                    kf(&[("transform", "scaleX(0)")]),
                    kf(&[("transform", "scaleX(1)")]),
                ],
                duration_ms,
                delay_ms,
                easing: Easing::OutQuad,
                repeat: Repeat::Once,
                transform_origin: Some("left center"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop<'a>(frame: &'a Keyframe, name: &str) -> &'a str {
        frame
            .props
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("keyframe missing {name}"))
    }

    #[test]
    fn entrance_fade_goes_hidden_to_visible() {
        let spec = Intent::EntranceFade {
            rise_px: 40.0,
            duration_ms: 850.0,
            delay_ms: 0.0,
        }
        .spec();
        assert_eq!(spec.keyframes.len(), 2);
        assert_eq!(prop(&spec.keyframes[0], "opacity"), "0");
        assert_eq!(prop(&spec.keyframes[0], "transform"), "translateY(40px)");
        assert_eq!(prop(&spec.keyframes[1], "opacity"), "1");
        assert_eq!(spec.repeat, Repeat::Once);
    }

    #[test]
    fn slide_direction_follows_side() {
        let left = Intent::EntranceSlide {
            from: SlideFrom::Left,
            distance_px: 80.0,
            duration_ms: 800.0,
            delay_ms: 0.0,
        }
        .spec();
        let right = Intent::EntranceSlide {
            from: SlideFrom::Right,
            distance_px: 80.0,
            duration_ms: 800.0,
            delay_ms: 0.0,
        }
        .spec();
        assert_eq!(prop(&left.keyframes[0], "transform"), "translateX(-80px)");
        assert_eq!(prop(&right.keyframes[0], "transform"), "translateX(80px)");
    }

    #[test]
    fn alternating_sides_by_index() {
        assert_eq!(SlideFrom::for_index(0), SlideFrom::Left);
        assert_eq!(SlideFrom::for_index(1), SlideFrom::Right);
        assert_eq!(SlideFrom::for_index(2), SlideFrom::Left);
        assert_eq!(SlideFrom::for_index(5), SlideFrom::Right);
    }

    #[test]
    fn float_loops_mirrored_at_half_period() {
        let spec = Intent::ContinuousFloat {
            amplitude_px: 12.0,
            period_ms: 6000.0,
        }
        .spec();
        assert_eq!(spec.repeat, Repeat::Mirror);
        assert_eq!(spec.duration_ms, 3000.0);
        assert_eq!(prop(&spec.keyframes[1], "transform"), "translateY(-12px)");
    }

    #[test]
    fn hover_lift_animates_from_current_state() {
        let spec = Intent::HoverLift {
            scale: 1.03,
            lift_px: 6.0,
            duration_ms: 350.0,
        }
        .spec();
        // implicit starting keyframe: only the target state is authored
        assert_eq!(spec.keyframes.len(), 1);
        assert_eq!(
            prop(&spec.keyframes[0], "transform"),
            "scale(1.03) translateY(-6px)"
        );
    }

    #[test]
    fn grow_x_is_left_anchored() {
        let spec = Intent::GrowX {
            duration_ms: 500.0,
            delay_ms: 0.0,
        }
        .spec();
        assert_eq!(spec.transform_origin, Some("left center"));
    }

    #[test]
    fn only_floats_hold_the_transform_open_ended() {
        let float = Intent::ContinuousFloat {
            amplitude_px: 12.0,
            period_ms: 6000.0,
        };
        assert!(float.holds_transform_open_ended());

        let fade = Intent::EntranceFade {
            rise_px: 40.0,
            duration_ms: 800.0,
            delay_ms: 0.0,
        };
        let lift = Intent::HoverLift {
            scale: 1.05,
            lift_px: 4.0,
            duration_ms: 300.0,
        };
        assert!(!fade.holds_transform_open_ended());
        assert!(!lift.holds_transform_open_ended());
    }

    #[test]
    fn easing_maps_to_css() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert!(Easing::OutBack.css().starts_with("cubic-bezier"));
    }
}
