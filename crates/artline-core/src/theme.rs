// File: crates/artline-core/src/theme.rs
// Summary: Ordinal color palette and light/dark theming for chart rendering.

/// Fixed, finite color sequence assigned to group keys in first-seen order,
/// wrapping around when keys exceed the palette length.
#[derive(Clone, Debug)]
pub struct OrdinalPalette {
    colors: Vec<String>,
}

impl OrdinalPalette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        Self { colors }
    }

    /// Color for the `index`-th distinct group key, recycling past the end.
    pub fn color(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return "#000000";
        }
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for OrdinalPalette {
    /// Bronze, eggshell, light blue, light steel blue, battleship grey:
    /// one color per expected material, in legend order.
    fn default() -> Self {
        Self::new(["#CD7F32", "#F0EAD6", "#ADD8E6", "#B0C4DE", "#848482"])
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub text: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "black",
            axis_line: "#F0EAD6",
            axis_label: "#F0EAD6",
            text: "#F0EAD6",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#FAFAFC",
            axis_line: "#3C3C46",
            axis_label: "#14141E",
            text: "#14141E",
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
