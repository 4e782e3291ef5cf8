// Button prop types and their class tables
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PropParseError, PropResult};
use crate::utils::merge_classes;

/// Classes every button carries regardless of its props, including the
/// focus ring and the `disabled:` state variants.
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-x-1.5 rounded-md \
    font-semibold text-white shadow-sm transition-colors focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-offset-2 disabled:cursor-not-allowed \
    disabled:opacity-50";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    #[default]
    Primary,
    Success,
    Info,
    Warning,
    Error,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 5] = [
        ButtonColor::Primary,
        ButtonColor::Success,
        ButtonColor::Info,
        ButtonColor::Warning,
        ButtonColor::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonColor::Primary => "primary",
            ButtonColor::Success => "success",
            ButtonColor::Info => "info",
            ButtonColor::Warning => "warning",
            ButtonColor::Error => "error",
        }
    }

    /// Background, hover and focus-ring classes for this color.
    pub const fn classes(self) -> &'static str {
        match self {
            ButtonColor::Primary => "bg-indigo-500 hover:bg-indigo-600 focus-visible:ring-indigo-500",
            ButtonColor::Success => "bg-green-500 hover:bg-green-600 focus-visible:ring-green-500",
            ButtonColor::Info => "bg-blue-500 hover:bg-blue-600 focus-visible:ring-blue-500",
            ButtonColor::Warning => "bg-amber-500 hover:bg-amber-600 focus-visible:ring-amber-500",
            ButtonColor::Error => "bg-red-500 hover:bg-red-600 focus-visible:ring-red-500",
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonColor {
    type Err = PropParseError;

    fn from_str(s: &str) -> PropResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ButtonColor::Primary),
            "success" => Ok(ButtonColor::Success),
            "info" => Ok(ButtonColor::Info),
            "warning" => Ok(ButtonColor::Warning),
            "error" => Ok(ButtonColor::Error),
            _ => Err(PropParseError::UnknownColor(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    /// Padding and text-size classes for this size.
    pub const fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2.5 py-1.5 text-xs",
            ButtonSize::Medium => "px-3.5 py-2 text-sm",
            ButtonSize::Large => "px-4 py-2 text-base",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = PropParseError;

    fn from_str(s: &str) -> PropResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(ButtonSize::Small),
            "medium" => Ok(ButtonSize::Medium),
            "large" => Ok(ButtonSize::Large),
            _ => Err(PropParseError::UnknownSize(s.to_string())),
        }
    }
}

/// Value of the rendered `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub const ALL: [ButtonType; 3] = [ButtonType::Button, ButtonType::Submit, ButtonType::Reset];

    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonType {
    type Err = PropParseError;

    fn from_str(s: &str) -> PropResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(ButtonType::Button),
            "submit" => Ok(ButtonType::Submit),
            "reset" => Ok(ButtonType::Reset),
            _ => Err(PropParseError::UnknownType(s.to_string())),
        }
    }
}

/// Full class set for a button: base, color, size, then the caller's classes.
pub fn button_class_names(color: ButtonColor, size: ButtonSize, custom: Option<&str>) -> String {
    merge_classes(&[
        BASE_CLASSES,
        color.classes(),
        size.classes(),
        custom.unwrap_or_default(),
    ])
}

/// A button described as data, e.g. a preset loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub color: ButtonColor,
    pub size: ButtonSize,
    pub disabled: bool,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ButtonConfig {
    pub fn from_json(json: &str) -> PropResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn class_names(&self) -> String {
        button_class_names(self.color, self.size, self.class.as_deref())
    }
}
