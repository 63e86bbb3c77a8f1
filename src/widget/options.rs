//! String-keyed widget options.
//!
//! Widgets are normally configured through the typed builder methods. This
//! module adds a name/value surface for callers that build dialogs from data
//! (config files, tests, tooling), with validation errors instead of silent
//! drops: an unknown name or a wrongly-shaped value is a hard error.

use crate::error::{Error, Result};
use crate::geometry::Side;
use crate::render::Color;
use crate::widget::{Align, Decoration, StateSlot, Widget, WidgetKind};

/// A dynamically-typed option value.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Int(i32),
    Ints(Vec<i32>),
    Text(String),
    Color(Color),
    Flag(bool),
    Alignment(Align),
}

impl OptionValue {
    fn as_int(&self, name: &str) -> Result<i32> {
        match self {
            OptionValue::Int(v) => Ok(*v),
            _ => Err(invalid(name, "an integer")),
        }
    }

    fn as_ints(&self, name: &str) -> Result<Vec<i32>> {
        match self {
            OptionValue::Int(v) => Ok(vec![*v]),
            OptionValue::Ints(v) => Ok(v.clone()),
            _ => Err(invalid(name, "an integer list")),
        }
    }

    fn as_text(&self, name: &str) -> Result<&str> {
        match self {
            OptionValue::Text(v) => Ok(v),
            _ => Err(invalid(name, "a string")),
        }
    }

    fn as_color(&self, name: &str) -> Result<Color> {
        match self {
            OptionValue::Color(v) => Ok(*v),
            _ => Err(invalid(name, "a color")),
        }
    }

    fn as_flag(&self, name: &str) -> Result<bool> {
        match self {
            OptionValue::Flag(v) => Ok(*v),
            _ => Err(invalid(name, "a boolean")),
        }
    }

    fn as_alignment(&self, name: &str) -> Result<Align> {
        match self {
            OptionValue::Alignment(v) => Ok(*v),
            OptionValue::Text(v) => match v.as_str() {
                "center" => Ok(Align::Center),
                "left" => Ok(Align::Left),
                "right" => Ok(Align::Right),
                _ => Err(invalid(name, "one of center, left, right")),
            },
            _ => Err(invalid(name, "an alignment")),
        }
    }
}

fn invalid(name: &str, expected: &'static str) -> Error {
    Error::InvalidOptionValue { name: name.to_owned(), expected }
}

fn decoration_by_name(name: &str, value: &str) -> Result<Decoration> {
    match value {
        "none" => Ok(Decoration::None),
        "solid" => Ok(Decoration::Solid),
        "bevel" => Ok(Decoration::Bevel),
        "bevel_inset" => Ok(Decoration::BevelInset),
        "rounded_corners" => Ok(Decoration::RoundedCorners),
        _ => Err(invalid(name, "a decoration name")),
    }
}

impl Widget {
    /// Apply one named option.
    ///
    /// Fails with [`Error::UnknownOption`] for an unrecognized name and
    /// [`Error::InvalidOptionValue`] for a value of the wrong shape; in both
    /// cases the widget is unchanged.
    pub fn apply_option(&mut self, name: &str, value: &OptionValue) -> Result<()> {
        match name {
            "alignment" => self.set_align(value.as_alignment(name)?),
            "font" => {
                let family = value.as_text(name)?.to_owned();
                if self.font.family != family {
                    self.font.family = family;
                    self.touch();
                }
            }
            "font_size" => self.set_font_size(value.as_int(name)?),
            "width" => {
                let v = Some(value.as_int(name)?);
                if self.width != v {
                    self.width = v;
                    self.touch();
                }
            }
            "height" => {
                let v = Some(value.as_int(name)?);
                if self.height != v {
                    self.height = v;
                    self.touch();
                }
            }
            "margin" => self.set_margin(&value.as_ints(name)?)?,
            "margin_top" => self.set_margin_side(Side::Top, value.as_int(name)?),
            "margin_right" => self.set_margin_side(Side::Right, value.as_int(name)?),
            "margin_bottom" => self.set_margin_side(Side::Bottom, value.as_int(name)?),
            "margin_left" => self.set_margin_side(Side::Left, value.as_int(name)?),
            "padding" => self.set_padding(&value.as_ints(name)?)?,
            "padding_top" => self.set_padding_side(Side::Top, value.as_int(name)?),
            "padding_right" => self.set_padding_side(Side::Right, value.as_int(name)?),
            "padding_bottom" => self.set_padding_side(Side::Bottom, value.as_int(name)?),
            "padding_left" => self.set_padding_side(Side::Left, value.as_int(name)?),
            "foreground_color" => self.set_foreground(StateSlot::Base, value.as_color(name)?),
            "foreground_color_hover" => {
                self.set_foreground(StateSlot::Hover, value.as_color(name)?)
            }
            "foreground_color_focus" => {
                self.set_foreground(StateSlot::Focus, value.as_color(name)?)
            }
            "foreground_color_disabled" => {
                self.set_foreground(StateSlot::Disabled, value.as_color(name)?)
            }
            "background_color" => self.set_background(StateSlot::Base, value.as_color(name)?),
            "background_color_hover" => {
                self.set_background(StateSlot::Hover, value.as_color(name)?)
            }
            "background_color_focus" => {
                self.set_background(StateSlot::Focus, value.as_color(name)?)
            }
            "background_color_disabled" => {
                self.set_background(StateSlot::Disabled, value.as_color(name)?)
            }
            "disabled" => self.set_disabled(value.as_flag(name)?),
            "decoration" | "effect" => {
                let decoration = decoration_by_name(name, value.as_text(name)?)?;
                self.set_decoration(decoration);
            }
            "value" => {
                let WidgetKind::Radio(radio) = &mut self.kind else {
                    return Err(invalid(name, "a radio widget"));
                };
                let v = Some(value.as_text(name)?.to_owned());
                if radio.value != v {
                    radio.value = v;
                    self.touch();
                }
            }
            _ => return Err(Error::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
