//! The format dispatcher and its plugins.
//!
//! A [`Registry`] holds two ordered lists of parsers, one for color strings
//! and one for structured colors. Parsing tries each parser of the matching
//! kind in order and accepts the first result. The default registry only
//! knows hexadecimal, RGB, HSL, and Oklch strings as well as RGB, HSL, HSV,
//! and Oklch objects. [`Plugin`]s append further parsers.
//!
//! Most code uses the process-wide registry through [`Color::new`] and
//! installs plugins with [`extend`]. Code that needs deterministic precedence,
//! notably between CIELAB and Oklab objects, which share field names, can
//! instead own a registry and parse with [`Color::with_registry`].
//!
//! [`Color::new`]: crate::Color::new
//! [`Color::with_registry`]: crate::Color::with_registry

use std::sync::{LazyLock, PoisonError, RwLock};

use log::{debug, trace};

use crate::space::{
    parse_css, parse_hex, parse_object, Cmyk, ColorModel, ColorObject, Format, Hsl, Hsv, Hwb,
    Lab, Lch, Oklab, Oklch, Rgb, Xyz,
};

/// A parser for color strings. The string has been trimmed already.
pub type StringParser = fn(&str) -> Option<Rgb>;

/// A parser for structured colors.
pub type ObjectParser = fn(&ColorObject) -> Option<Rgb>;

// --------------------------------------------------------------------------------------------------------------------

/// A color input, either a string or a structured object.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Text(String),
    Object(ColorObject),
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<ColorObject> for Input {
    fn from(value: ColorObject) -> Self {
        Self::Object(value)
    }
}

impl From<&ColorObject> for Input {
    fn from(value: &ColorObject) -> Self {
        Self::Object(value.clone())
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Text(ref text) => f.write_str(text),
            Self::Object(ref object) => write!(f, "{}", object),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An extension to the format dispatcher.
///
/// A plugin has a unique name and appends parsers to a registry. Installing
/// the same plugin twice has no effect, since [`Registry::extend`] skips
/// plugins whose names have been installed before.
pub trait Plugin {
    /// Get this plugin's unique name.
    fn name(&self) -> &'static str;

    /// Install this plugin's parsers.
    fn install(&self, registry: &mut Registry);
}

/// An ordered collection of string and object parsers.
#[derive(Clone)]
pub struct Registry {
    strings: Vec<(StringParser, Format)>,
    objects: Vec<(ObjectParser, Format)>,
    plugins: Vec<&'static str>,
}

impl Registry {
    /// Create a new registry with the default parsers.
    pub fn new() -> Self {
        Self {
            strings: vec![
                (parse_hex as StringParser, Format::Hex),
                (parse_css::<Rgb> as StringParser, Format::Rgb),
                (parse_css::<Hsl> as StringParser, Format::Hsl),
                (parse_css::<Oklch> as StringParser, Format::Oklch),
            ],
            objects: vec![
                (parse_object::<Rgb> as ObjectParser, Format::Rgb),
                (parse_object::<Hsl> as ObjectParser, Format::Hsl),
                (parse_object::<Hsv> as ObjectParser, Format::Hsv),
                (parse_object::<Oklch> as ObjectParser, Format::Oklch),
            ],
            plugins: Vec::new(),
        }
    }

    /// Create a new registry without any parsers.
    pub fn empty() -> Self {
        Self {
            strings: Vec::new(),
            objects: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Append a string parser.
    pub fn add_string_parser(&mut self, parser: StringParser, format: Format) {
        self.strings.push((parser, format));
    }

    /// Append an object parser.
    pub fn add_object_parser(&mut self, parser: ObjectParser, format: Format) {
        self.objects.push((parser, format));
    }

    /// Append both parsers of the color model.
    pub fn add_model<M: ColorModel>(&mut self) {
        self.add_string_parser(parse_css::<M>, M::FORMAT);
        self.add_object_parser(parse_object::<M>, M::FORMAT);
    }

    /// Determine whether the plugin with the given name has been installed.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| *plugin == name)
    }

    /// Install the plugins in order, skipping already installed ones.
    pub fn extend(&mut self, plugins: &[&dyn Plugin]) {
        for plugin in plugins {
            let name = plugin.name();
            if self.has_plugin(name) {
                trace!("skipping already installed plugin {}", name);
                continue;
            }

            plugin.install(self);
            self.plugins.push(name);
            debug!("installed plugin {}", name);
        }
    }

    /// Parse the color string with the first accepting parser.
    pub fn parse_str(&self, text: &str) -> Option<(Rgb, Format)> {
        let text = text.trim();
        let result = self
            .strings
            .iter()
            .find_map(|&(parser, format)| parser(text).map(|rgb| (rgb, format)));

        if result.is_none() {
            trace!("no parser accepts color string {:?}", text);
        }
        result
    }

    /// Parse the structured color with the first accepting parser.
    pub fn parse_object(&self, object: &ColorObject) -> Option<(Rgb, Format)> {
        let result = self
            .objects
            .iter()
            .find_map(|&(parser, format)| parser(object).map(|rgb| (rgb, format)));

        if result.is_none() {
            trace!("no parser accepts color object {}", object);
        }
        result
    }

    /// Parse the input with the first accepting parser of the right kind.
    pub fn parse(&self, input: &Input) -> Option<(Rgb, Format)> {
        match *input {
            Input::Text(ref text) => self.parse_str(text),
            Input::Object(ref object) => self.parse_object(object),
        }
    }

    /// Determine the format of the first parser accepting the input.
    pub fn get_format(&self, input: &Input) -> Option<Format> {
        self.parse(input).map(|(_, format)| format)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn formats<P>(parsers: &[(P, Format)]) -> Vec<Format> {
            parsers.iter().map(|&(_, format)| format).collect()
        }

        f.debug_struct("Registry")
            .field("strings", &formats(&self.strings))
            .field("objects", &formats(&self.objects))
            .field("plugins", &self.plugins)
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// --------------------------------------------------------------------------------------------------------------------

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Install the plugins into the process-wide registry.
///
/// Plugins are installed in order. Each plugin is installed at most once, no
/// matter how often this function is called.
pub fn extend(plugins: &[&dyn Plugin]) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .extend(plugins);
}

/// Parse the input with the process-wide registry.
pub(crate) fn parse(input: &Input) -> Option<(Rgb, Format)> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .parse(input)
}

/// Determine the format of the input according to the process-wide registry.
///
/// ```
/// # use chromata::{get_format, Format};
/// assert_eq!(get_format("#c0ffee"), Some(Format::Hex));
/// assert_eq!(get_format("rgb(1 2 3)"), Some(Format::Rgb));
/// assert_eq!(get_format("chartreuse"), None);
/// ```
pub fn get_format<I: Into<Input>>(input: I) -> Option<Format> {
    parse(&input.into()).map(|(_, format)| format)
}

// ====================================================================================================================

macro_rules! plugin {
    ($(#[$attr:meta])* $plugin:ident, $name:literal, |$registry:ident| $body:block) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $plugin;

        impl Plugin for $plugin {
            fn name(&self) -> &'static str {
                $name
            }

            fn install(&self, $registry: &mut Registry) $body
        }
    };
}

plugin!(
    /// Parsing for CIELAB strings `lab(l% a b)` and objects `{l, a, b}`.
    LabPlugin, "lab", |registry| { registry.add_model::<Lab>(); }
);

plugin!(
    /// Parsing for CIELCh strings `lch(l% c h)` and objects `{l, c, h}`.
    LchPlugin, "lch", |registry| { registry.add_model::<Lch>(); }
);

plugin!(
    /// Parsing for Oklab strings `oklab(l% a b)` and objects `{l, a, b}`.
    OklabPlugin, "oklab", |registry| { registry.add_model::<Oklab>(); }
);

plugin!(
    /// Parsing for XYZ strings `color(xyz-d65 x y z)` and objects `{x, y, z}`.
    XyzPlugin, "xyz", |registry| { registry.add_model::<Xyz>(); }
);

plugin!(
    /// Parsing for HWB strings `hwb(h w% b%)` and objects `{h, w, b}`.
    HwbPlugin, "hwb", |registry| { registry.add_model::<Hwb>(); }
);

plugin!(
    /// Parsing for CMYK strings `device-cmyk(c% m% y% k%)` and objects `{c,
    /// m, y, k}`.
    CmykPlugin, "cmyk", |registry| { registry.add_model::<Cmyk>(); }
);
