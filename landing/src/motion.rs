//! Declarative motion timing.
//!
//! A [`Motion`] pairs a starting [`Pose`] with a [`Transition`]; the end
//! pose is always the element at rest. Components turn a motion into an
//! inline `style` string, either as an on-mount keyframe entrance
//! ([`Motion::entrance_style`]) or as a viewport-driven transition
//! ([`Motion::reveal_style`]). Hover effects and ambient loops live in the
//! stylesheet as plain CSS classes.
//!
//! Times are seconds, as literals; they are written out as whole
//! milliseconds so the CSS is stable.

/// A single CSS-expressible frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in px.
    pub x: f32,
    /// Vertical offset in px.
    pub y: f32,
    pub scale: f32,
    /// Rotation in degrees.
    pub rotate: f32,
    /// Rotation around the X axis in degrees (card flip-in).
    pub rotate_x: f32,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
    };

    /// Invisible, otherwise at rest.
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub const fn shift_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub const fn shift_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub const fn tilted_x(self, rotate_x: f32) -> Self {
        Self { rotate_x, ..self }
    }

    /// CSS `transform` value, `none` at rest.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// `opacity` + `transform` declarations.
    pub fn declarations(&self) -> String {
        format!("opacity:{};transform:{}", self.opacity, self.transform())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration and delay in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::EaseOut,
        }
    }

    pub const fn ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    pub const fn delay(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    /// `<duration> <ease> <delay>` with millisecond units.
    fn timing(&self) -> String {
        format!(
            "{} {} {}",
            millis(self.duration),
            self.ease.css(),
            millis(self.delay)
        )
    }

    /// Value for the CSS `transition` property.
    pub fn css(&self) -> String {
        let timing = self.timing();
        format!("opacity {timing}, transform {timing}")
    }
}

fn millis(seconds: f32) -> String {
    format!("{}ms", (seconds * 1000.0).round().max(0.0) as u32)
}

/// Delay of the `index`-th child in a staggered group.
pub fn stagger(base: f32, step: f32, index: usize) -> f32 {
    base + step * index as f32
}

/// A one-shot motion from `from` to [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub transition: Transition,
}

impl Motion {
    pub const fn new(from: Pose, transition: Transition) -> Self {
        Self { from, transition }
    }

    /// Same motion starting `delay` seconds later than its own delay.
    pub fn after(self, delay: f32) -> Self {
        Self {
            transition: self.transition.delay(self.transition.delay + delay),
            ..self
        }
    }

    /// Same motion as the `index`-th member of a group staggered by `step`.
    pub fn staggered(self, step: f32, index: usize) -> Self {
        Self {
            transition: self
                .transition
                .delay(stagger(self.transition.delay, step, index)),
            ..self
        }
    }

    /// Keyframe entrance that plays once on mount.
    ///
    /// The `motion-enter` keyframes read the starting frame from the
    /// `--motion-from-*` custom properties and end on the element's own
    /// style. With reduced motion the element is simply at rest.
    pub fn entrance_style(&self, reduced: bool) -> String {
        if reduced {
            return Pose::REST.declarations();
        }
        format!(
            "--motion-from-opacity:{};--motion-from-transform:{};animation:motion-enter {} both",
            self.from.opacity,
            self.from.transform(),
            self.transition.timing()
        )
    }

    /// Transition-driven entrance toggled by viewport visibility.
    ///
    /// With reduced motion the element is at rest regardless of
    /// `revealed`, so nothing on the page waits on an animation.
    pub fn reveal_style(&self, revealed: bool, reduced: bool) -> String {
        if reduced {
            return Pose::REST.declarations();
        }
        let pose = if revealed { Pose::REST } else { self.from };
        format!(
            "{};transition:{}",
            pose.declarations(),
            self.transition.css()
        )
    }
}

/// Fade up 30px over 0.6s, the default section heading entrance.
pub const FADE_UP: Motion = Motion::new(Pose::HIDDEN.shift_y(30.0), Transition::new(0.6));

/// Slide in from the left by 20px.
pub const SLIDE_RIGHT: Motion = Motion::new(Pose::HIDDEN.shift_x(-20.0), Transition::new(0.4));

/// Pop in from nothing.
pub const POP: Motion = Motion::new(Pose::HIDDEN.scaled(0.0), Transition::new(0.4));

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rest_pose_has_no_transform() {
        assert_eq!(Pose::REST.transform(), "none");
        assert_eq!(Pose::REST.declarations(), "opacity:1;transform:none");
    }

    #[test]
    fn transform_composes_only_non_identity_parts() {
        let pose = Pose::HIDDEN.shift_y(50.0).tilted_x(-15.0);
        assert_eq!(pose.transform(), "translate(0px, 50px) rotateX(-15deg)");

        let pose = Pose::HIDDEN.scaled(0.9);
        assert_eq!(pose.transform(), "scale(0.9)");
    }

    #[test]
    fn stagger_adds_step_per_index() {
        assert_eq!(stagger(0.0, 0.1, 0), 0.0);
        assert_eq!(millis(stagger(2.0, 0.1, 2)), "2200ms");
        assert_eq!(millis(stagger(0.8, 0.1, 3)), "1100ms");
    }

    #[test]
    fn transition_css_covers_opacity_and_transform() {
        let t = Transition::new(0.6).delay(0.2);
        assert_eq!(
            t.css(),
            "opacity 600ms ease-out 200ms, transform 600ms ease-out 200ms"
        );
        let t = Transition::new(0.3).ease(Ease::EaseInOut);
        assert_eq!(t.css(), "opacity 300ms ease-in-out 0ms, transform 300ms ease-in-out 0ms");
    }

    #[test]
    fn reveal_hides_until_revealed() {
        let hidden = FADE_UP.reveal_style(false, false);
        assert!(hidden.starts_with("opacity:0;transform:translate(0px, 30px)"));

        let shown = FADE_UP.reveal_style(true, false);
        assert!(shown.starts_with("opacity:1;transform:none;transition:"));
    }

    #[test]
    fn reduced_motion_is_always_at_rest() {
        for revealed in [false, true] {
            assert_eq!(
                FADE_UP.reveal_style(revealed, true),
                "opacity:1;transform:none"
            );
        }
        assert_eq!(POP.entrance_style(true), "opacity:1;transform:none");
    }

    #[test]
    fn entrance_uses_keyframes_with_from_pose() {
        let style = SLIDE_RIGHT.after(0.2).entrance_style(false);
        assert_eq!(
            style,
            "--motion-from-opacity:0;--motion-from-transform:translate(-20px, 0px);\
             animation:motion-enter 400ms ease-out 200ms both"
        );
    }

    #[test]
    fn staggered_builds_on_existing_delay() {
        let motion = FADE_UP.after(0.8).staggered(0.1, 2);
        assert_eq!(millis(motion.transition.delay), "1000ms");
    }
}
