use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Smallest font size a snapshot can carry.
pub const MIN_FONT_SIZE: u32 = 8;

/// Font size of the seed snapshot.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Text of the seed snapshot.
pub const DEFAULT_TEXT: &str = "Edit this text";

/// Every font family the box can be set to, in selector order.
pub const FONT_FAMILIES: [FontFamily; 6] = [
    FontFamily::Arial,
    FontFamily::TimesNewRoman,
    FontFamily::Helvetica,
    FontFamily::Verdana,
    FontFamily::Georgia,
    FontFamily::CourierNew,
];

/// Slant of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// The other style (normal <-> italic).
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Normal => Self::Italic,
            Self::Italic => Self::Normal,
        }
    }

    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic)
    }
}

/// Font family allowlist.
///
/// The set is closed: a name outside it cannot be represented, so the
/// history never stores an unknown family. Parse user input with
/// [`FontFamily::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    Helvetica,
    Verdana,
    Georgia,
    CourierNew,
}

impl FontFamily {
    /// Display name, as offered in the selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::TimesNewRoman => "Times New Roman",
            Self::Helvetica => "Helvetica",
            Self::Verdana => "Verdana",
            Self::Georgia => "Georgia",
            Self::CourierNew => "Courier New",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Arial => 0,
            Self::TimesNewRoman => 1,
            Self::Helvetica => 2,
            Self::Verdana => 3,
            Self::Georgia => 4,
            Self::CourierNew => 5,
        }
    }

    /// Next family in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        FONT_FAMILIES[(self.index() + 1) % FONT_FAMILIES.len()]
    }

    /// Previous family in selector order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        FONT_FAMILIES[(self.index() + FONT_FAMILIES.len() - 1) % FONT_FAMILIES.len()]
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a font family name is not in the allowlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown font family {name:?} \
     (expected one of: Arial, Times New Roman, Helvetica, Verdana, Georgia, Courier New)"
)]
pub struct UnknownFontFamily {
    pub name: String,
}

impl FromStr for FontFamily {
    type Err = UnknownFontFamily;

    /// Parse a family name. Matching ignores ASCII case and surrounding
    /// whitespace; inner spacing must match the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FONT_FAMILIES
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownFontFamily {
                name: s.to_string(),
            })
    }
}

/// One complete record of the document: the text plus every formatting
/// attribute.
///
/// Snapshots are plain owned values. A new one is derived from an old one
/// with [`AttributeSnapshot::with_patch`], which copies and overrides; a
/// stored snapshot is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSnapshot {
    pub text: String,
    pub font_size: u32,
    pub font_style: FontStyle,
    pub is_bold: bool,
    pub font_family: FontFamily,
    pub is_underline: bool,
}

impl Default for AttributeSnapshot {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Normal,
            is_bold: false,
            font_family: FontFamily::Arial,
            is_underline: false,
        }
    }
}

impl AttributeSnapshot {
    /// Copy this snapshot, overriding the fields present in `patch`.
    ///
    /// Font sizes below [`MIN_FONT_SIZE`] are raised to it.
    #[must_use]
    pub fn with_patch(&self, patch: SnapshotPatch) -> Self {
        Self {
            text: patch.text.unwrap_or_else(|| self.text.clone()),
            font_size: patch
                .font_size
                .unwrap_or(self.font_size)
                .max(MIN_FONT_SIZE),
            font_style: patch.font_style.unwrap_or(self.font_style),
            is_bold: patch.is_bold.unwrap_or(self.is_bold),
            font_family: patch.font_family.unwrap_or(self.font_family),
            is_underline: patch.is_underline.unwrap_or(self.is_underline),
        }
    }
}

/// A partial set of field updates for [`AttributeSnapshot::with_patch`].
///
/// ```
/// use dragbox::history::{AttributeSnapshot, FontFamily, SnapshotPatch};
///
/// let seed = AttributeSnapshot::default();
/// let next = seed.with_patch(SnapshotPatch::new().font_family(FontFamily::Georgia).bold(true));
/// assert_eq!(next.font_family, FontFamily::Georgia);
/// assert!(next.is_bold);
/// assert_eq!(next.text, seed.text);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotPatch {
    pub text: Option<String>,
    pub font_size: Option<u32>,
    pub font_style: Option<FontStyle>,
    pub is_bold: Option<bool>,
    pub font_family: Option<FontFamily>,
    pub is_underline: Option<bool>,
}

impl SnapshotPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub const fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    #[must_use]
    pub const fn bold(mut self, bold: bool) -> Self {
        self.is_bold = Some(bold);
        self
    }

    #[must_use]
    pub const fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    #[must_use]
    pub const fn underline(mut self, underline: bool) -> Self {
        self.is_underline = Some(underline);
        self
    }

    /// True when the patch overrides nothing.
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.font_size.is_none()
            && self.font_style.is_none()
            && self.is_bold.is_none()
            && self.font_family.is_none()
            && self.is_underline.is_none()
    }
}

impl From<AttributeSnapshot> for SnapshotPatch {
    /// A patch that overrides every field.
    fn from(snapshot: AttributeSnapshot) -> Self {
        Self {
            text: Some(snapshot.text),
            font_size: Some(snapshot.font_size),
            font_style: Some(snapshot.font_style),
            is_bold: Some(snapshot.is_bold),
            font_family: Some(snapshot.font_family),
            is_underline: Some(snapshot.is_underline),
        }
    }
}
