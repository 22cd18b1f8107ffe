// SPDX-License-Identifier: MPL-2.0
//! Renderable toast content.
//!
//! Content is described as a small declarative [`RenderTree`] so the
//! presentation core never depends on a concrete widget type. Anything
//! implementing [`ToastView`] can be presented; [`MessageToast`] and
//! [`BannerToast`] are the stock styles.

use iced::Color;

use crate::ui::design_tokens::{palette, radius};

/// Role of a text node, mapped to the typography scale at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Body,
}

/// One node of renderable toast content.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Text { content: String, role: TextRole },
}

/// Visual envelope of a toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub background: Color,
    pub text_color: Color,
    pub corner_radius: f32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            background: Color {
                a: 0.8,
                ..palette::BLACK
            },
            text_color: palette::WHITE,
            corner_radius: radius::MD,
        }
    }
}

/// Fully described toast content, ready to hand to a host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree {
    pub nodes: Vec<RenderNode>,
    pub style: CardStyle,
}

/// Renderable toast content.
///
/// The presentation core invokes `render` exactly once per presentation,
/// at attach time, and never calls anything else on the content.
pub trait ToastView: Send {
    fn render(&self) -> RenderTree;
}

/// Default single-message toast: translucent dark card with light text.
#[derive(Debug, Clone)]
pub struct MessageToast {
    message: String,
    style: CardStyle,
}

impl MessageToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: CardStyle::default(),
        }
    }

    /// Overrides the card style.
    #[must_use]
    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ToastView for MessageToast {
    fn render(&self) -> RenderTree {
        RenderTree {
            nodes: vec![RenderNode::Text {
                content: self.message.clone(),
                role: TextRole::Body,
            }],
            style: self.style,
        }
    }
}

/// Accented toast with a title line above a body line.
#[derive(Debug, Clone)]
pub struct BannerToast {
    title: String,
    message: String,
    style: CardStyle,
}

impl BannerToast {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            style: CardStyle {
                background: palette::PRIMARY_500,
                text_color: palette::WHITE,
                corner_radius: radius::LG,
            },
        }
    }

    /// Overrides the card style.
    #[must_use]
    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }
}

impl ToastView for BannerToast {
    fn render(&self) -> RenderTree {
        RenderTree {
            nodes: vec![
                RenderNode::Text {
                    content: self.title.clone(),
                    role: TextRole::Title,
                },
                RenderNode::Text {
                    content: self.message.clone(),
                    role: TextRole::Body,
                },
            ],
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_toast_renders_a_single_body_node() {
        let tree = MessageToast::new("saved").render();

        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(
            tree.nodes[0],
            RenderNode::Text {
                content: "saved".to_string(),
                role: TextRole::Body,
            }
        );
    }

    #[test]
    fn banner_toast_renders_title_then_body() {
        let tree = BannerToast::new("Update", "restart required").render();

        assert_eq!(tree.nodes.len(), 2);
        assert!(matches!(
            &tree.nodes[0],
            RenderNode::Text { role: TextRole::Title, content } if content == "Update"
        ));
        assert!(matches!(
            &tree.nodes[1],
            RenderNode::Text { role: TextRole::Body, content } if content == "restart required"
        ));
    }

    #[test]
    fn default_card_is_translucent_dark_with_light_text() {
        let style = CardStyle::default();

        assert!(style.background.a < 1.0);
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn with_style_replaces_the_default() {
        let custom = CardStyle {
            background: palette::PRIMARY_700,
            text_color: palette::GRAY_100,
            corner_radius: radius::SM,
        };
        let tree = MessageToast::new("styled").with_style(custom).render();

        assert_eq!(tree.style, custom);
    }
}
