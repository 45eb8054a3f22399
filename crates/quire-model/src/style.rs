//! Inline styles and style sets.

/// Inline character style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    /// Bold (`strong`).
    Bold,
    /// Italic (`em`).
    Italic,
    /// Strikethrough (`s`).
    Strike,
    /// Superscript (`sup`).
    Super,
    /// Inline code (`code`).
    Code,
}

impl InlineStyle {
    /// All styles in weight order.
    pub const ALL: [Self; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Strike,
        Self::Super,
        Self::Code,
    ];

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Set of active inline styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSet(u8);

impl StyleSet {
    /// Set with no styles.
    pub const EMPTY: Self = Self(0);

    /// Set containing exactly one style.
    #[must_use]
    pub const fn only(style: InlineStyle) -> Self {
        Self(style.mask())
    }

    /// Return this set with `style` added.
    #[must_use]
    pub const fn with(self, style: InlineStyle) -> Self {
        Self(self.0 | style.mask())
    }

    /// Add a style in place.
    pub fn insert(&mut self, style: InlineStyle) {
        self.0 |= style.mask();
    }

    /// Check whether `style` is active.
    #[must_use]
    pub const fn contains(self, style: InlineStyle) -> bool {
        self.0 & style.mask() != 0
    }

    /// Check whether no style is active.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate active styles in weight order.
    pub fn iter(self) -> impl Iterator<Item = InlineStyle> {
        InlineStyle::ALL
            .into_iter()
            .filter(move |style| self.contains(*style))
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}
