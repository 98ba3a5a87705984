//! Prop sets for the `Box` and `Flex` layout primitives.
//!
//! These compose the individual resolvers into the full class list a
//! primitive renders with. Emission order is fixed so that the output is
//! stable across runs and suitable for snapshotting.

use std::collections::BTreeMap;

use super::alignment::{resolve_flex_alignment, AlignmentProp, FlexAlignment};
use super::class_list::ClassList;
use super::display::{resolve_display, DisplayKind};
use super::responsive::{responsive_classes, ResponsiveValue};
use super::sizing::{resolve_sizing, SizingProperty, SizingValue};
use super::spacing::{spacing_class, SpacingProperty, SpacingSize};
use super::token::semantic_token;
use super::visual::{resolve_visual, Background, Border, Rounded, Shadow, VisualProps};

/// Props accepted by the `Box` primitive.
///
/// # Example
///
/// ```rust
/// use kitbash::style::{BoxProps, Breakpoint, ResponsiveValue, SpacingProperty, SpacingSize};
///
/// let props = BoxProps::new()
///     .spacing(
///         SpacingProperty::Px,
///         ResponsiveValue::Scalar(SpacingSize::Sm).at(Breakpoint::Md, SpacingSize::Lg),
///     )
///     .bg("card")
///     .rounded("lg")
///     .class_name("relative");
///
/// assert_eq!(props.classes().to_string(), "px-2 md:px-6 bg-card rounded-lg relative");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxProps {
    pub display: Option<DisplayKind>,
    pub spacing: BTreeMap<SpacingProperty, ResponsiveValue<SpacingSize>>,
    pub sizing: BTreeMap<SizingProperty, ResponsiveValue<SizingValue>>,
    pub visual: VisualProps,
    /// Extra classes appended last, verbatim.
    pub class_name: Option<String>,
}

impl BoxProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: impl Into<DisplayKind>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn spacing(
        mut self,
        property: SpacingProperty,
        value: impl Into<ResponsiveValue<SpacingSize>>,
    ) -> Self {
        self.spacing.insert(property, value.into());
        self
    }

    pub fn sizing(
        mut self,
        property: SizingProperty,
        value: impl Into<ResponsiveValue<SizingValue>>,
    ) -> Self {
        self.sizing.insert(property, value.into());
        self
    }

    pub fn bg(mut self, bg: impl Into<Background>) -> Self {
        self.visual.bg = Some(bg.into());
        self
    }

    pub fn rounded(mut self, rounded: impl Into<Rounded>) -> Self {
        self.visual.rounded = Some(rounded.into());
        self
    }

    pub fn shadow(mut self, shadow: impl Into<Shadow>) -> Self {
        self.visual.shadow = Some(shadow.into());
        self
    }

    pub fn border(mut self, border: impl Into<Border>) -> Self {
        self.visual.border = Some(border.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Resolves every prop into the final class list.
    ///
    /// Order: display, spacing, sizing, visual, then `class_name`.
    pub fn classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        self.push_layout(&mut classes);
        if let Some(extra) = &self.class_name {
            classes.extend_str(extra);
        }
        classes
    }

    /// Pushes everything except `class_name`.
    fn push_layout(&self, classes: &mut ClassList) {
        if let Some(display) = &self.display {
            classes.push(resolve_display(display));
        }
        for (property, value) in &self.spacing {
            classes.extend(responsive_classes(value, |size| {
                spacing_class(property.as_str(), size)
            }));
        }
        for (property, value) in &self.sizing {
            classes.extend_str(&resolve_sizing(*property, value));
        }
        classes.extend(resolve_visual(&self.visual));
    }
}

semantic_token! {
    /// Main-axis direction of a flex container.
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Col => "col",
        ColReverse => "col-reverse",
    }
}

semantic_token! {
    /// Wrapping behaviour of a flex container.
    pub enum FlexWrap {
        Wrap => "wrap",
        NoWrap => "nowrap",
        WrapReverse => "wrap-reverse",
    }
}

/// Props accepted by the `Flex` primitive.
///
/// A `Flex` is a `Box` that defaults to `display: flex` and adds direction,
/// wrapping, gap and alignment.
///
/// ```rust
/// use kitbash::style::{AlignmentProp, FlexProps};
///
/// let props = FlexProps::new()
///     .direction("col")
///     .gap("md")
///     .align(AlignmentProp::AlignItems, "center");
///
/// assert_eq!(props.classes().to_string(), "flex flex-col gap-4 items-center");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexProps {
    pub base: BoxProps,
    pub direction: Option<ResponsiveValue<FlexDirection>>,
    pub wrap: Option<FlexWrap>,
    pub gap: Option<ResponsiveValue<SpacingSize>>,
    pub alignment: FlexAlignment,
}

impl FlexProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `f` to the underlying box props.
    pub fn with_box(mut self, f: impl FnOnce(BoxProps) -> BoxProps) -> Self {
        self.base = f(self.base);
        self
    }

    pub fn direction(mut self, direction: impl Into<ResponsiveValue<FlexDirection>>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn wrap(mut self, wrap: impl Into<FlexWrap>) -> Self {
        self.wrap = Some(wrap.into());
        self
    }

    pub fn gap(mut self, gap: impl Into<ResponsiveValue<SpacingSize>>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn align(mut self, prop: AlignmentProp, value: impl Into<String>) -> Self {
        self.alignment.set(prop, value);
        self
    }

    /// Resolves every prop into the final class list.
    ///
    /// Order: display (`flex` unless overridden), box layout classes,
    /// direction, wrap, gap, alignment, then `class_name`.
    pub fn classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        if self.base.display.is_none() {
            classes.push(resolve_display(&DisplayKind::Flex));
        }
        self.base.push_layout(&mut classes);
        if let Some(direction) = &self.direction {
            classes.extend(responsive_classes(direction, |d| format!("flex-{d}")));
        }
        if let Some(wrap) = &self.wrap {
            classes.push(format!("flex-{wrap}"));
        }
        if let Some(gap) = &self.gap {
            classes.extend(responsive_classes(gap, |size| spacing_class("gap", size)));
        }
        classes.extend(resolve_flex_alignment(&self.alignment));
        if let Some(extra) = &self.base.class_name {
            classes.extend_str(extra);
        }
        classes
    }
}
