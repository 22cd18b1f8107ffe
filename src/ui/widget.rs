// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering attached content.
//!
//! Renders the surface's current [`ToastFrame`] as a fixed-width card
//! anchored to the top or bottom edge, with opacity and offset taken
//! from the frame so animations need nothing beyond a redraw.

use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

use super::design_tokens::{shadow, sizing, spacing, typography};
use super::surface::{IcedSurface, ToastFrame};
use crate::render::{CardStyle, RenderNode, TextRole};
use crate::surface::{Anchor, Placement};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view<M: 'static>(frame: &ToastFrame) -> Element<'static, M> {
        let style = frame.tree.style;
        let opacity = frame.opacity;

        let mut content = Column::new().spacing(spacing::XXS);
        for node in &frame.tree.nodes {
            match node {
                RenderNode::Text {
                    content: node_text,
                    role,
                } => {
                    let size = match role {
                        TextRole::Title => typography::TITLE_SM,
                        TextRole::Body => typography::BODY,
                    };
                    let color = faded(style.text_color, opacity);
                    content = content.push(
                        Text::new(node_text.clone())
                            .size(size)
                            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
                    );
                }
            }
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| card_style(style, opacity))
            .into()
    }

    /// Renders the overlay for whatever the surface currently shows.
    ///
    /// Returns an empty, zero-sized element when no toast is attached.
    pub fn view_overlay<M: 'static>(surface: &IcedSurface) -> Element<'static, M> {
        match surface.frame() {
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            Some(frame) => {
                let placement = frame.placement;
                let offset = frame.offset;
                let card = Self::view(&frame);

                Container::new(card)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(match placement.anchor {
                        Anchor::Top => alignment::Vertical::Top,
                        Anchor::Bottom => alignment::Vertical::Bottom,
                    })
                    .padding(anchored_padding(placement, offset))
                    .into()
            }
        }
    }
}

/// Padding pinning the card to its anchored edge, displaced by the
/// animation offset (negative values move the card off the edge).
fn anchored_padding(placement: Placement, offset: f32) -> Padding {
    let edge = (placement.padding + offset).max(0.0);
    match placement.anchor {
        Anchor::Top => Padding {
            top: edge,
            right: spacing::MD,
            bottom: 0.0,
            left: spacing::MD,
        },
        Anchor::Bottom => Padding {
            top: 0.0,
            right: spacing::MD,
            bottom: edge,
            left: spacing::MD,
        },
    }
}

/// Style function for the toast card container.
fn card_style(style: CardStyle, opacity: f32) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(faded(style.background, opacity))),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: style.corner_radius.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, opacity),
            ..shadow::MD
        },
        text_color: Some(faded(style.text_color, opacity)),
        ..Default::default()
    }
}

/// Scales a color's alpha by the composite opacity.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MessageToast, ToastView};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn frame(opacity: f32) -> ToastFrame {
        ToastFrame {
            tree: MessageToast::new("saved").render(),
            placement: Placement {
                anchor: Anchor::Top,
                padding: 20.0,
            },
            opacity,
            offset: 0.0,
        }
    }

    #[test]
    fn faded_scales_alpha() {
        let color = Color {
            a: 0.8,
            ..Color::BLACK
        };
        assert_abs_diff_eq!(faded(color, 0.5).a, 0.4, epsilon = F32_EPSILON);
    }

    #[test]
    fn card_style_applies_background_and_opacity() {
        let style = CardStyle::default();
        let resolved = card_style(style, 1.0);

        match resolved.background {
            Some(iced::Background::Color(color)) => {
                assert_abs_diff_eq!(color.a, style.background.a, epsilon = F32_EPSILON);
            }
            _ => panic!("expected a solid background"),
        }
        assert!(resolved.text_color.is_some());
    }

    #[test]
    fn anchored_padding_pins_the_right_edge() {
        let top = anchored_padding(
            Placement {
                anchor: Anchor::Top,
                padding: 20.0,
            },
            0.0,
        );
        assert_eq!(top.top, 20.0);
        assert_eq!(top.bottom, 0.0);

        let bottom = anchored_padding(
            Placement {
                anchor: Anchor::Bottom,
                padding: 16.0,
            },
            0.0,
        );
        assert_eq!(bottom.bottom, 16.0);
        assert_eq!(bottom.top, 0.0);
    }

    #[test]
    fn anchored_padding_clamps_offset_at_the_edge() {
        let padding = anchored_padding(
            Placement {
                anchor: Anchor::Top,
                padding: 20.0,
            },
            -96.0,
        );
        assert_eq!(padding.top, 0.0);
    }

    #[test]
    fn view_builds_without_panicking() {
        let _: Element<'_, ()> = Toast::view(&frame(0.5));
    }

    #[test]
    fn view_overlay_handles_an_empty_surface() {
        let surface = IcedSurface::new();
        let _: Element<'_, ()> = Toast::view_overlay(&surface);
    }
}
