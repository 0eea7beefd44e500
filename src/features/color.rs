//! Color component validation for report attributes.

use super::tree::ReportNode;
use crate::error::Result;

/// A color that is expressible in DeviceRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    /// Red component
    pub red: f64,
    /// Green component
    pub green: f64,
    /// Blue component
    pub blue: f64,
}

impl RgbColor {
    /// Attribute names used when reporting a color.
    pub const COMPONENT_NAMES: [&'static str; 3] = ["red", "green", "blue"];

    /// Validate raw components.
    ///
    /// Exactly three finite components are required. With `strict_range`
    /// each must also lie in `[0, 1]`. Anything else (including a two- or
    /// four-component array) is not an RGB color.
    pub fn from_components(components: &[f64], strict_range: bool) -> Option<Self> {
        let &[red, green, blue] = components else {
            return None;
        };
        let valid = |c: f64| c.is_finite() && (!strict_range || (0.0..=1.0).contains(&c));
        if valid(red) && valid(green) && valid(blue) {
            Some(Self { red, green, blue })
        } else {
            None
        }
    }

    /// Set `red`, `green` and `blue` attributes on `node`.
    pub fn write_attributes(&self, node: &mut ReportNode) -> Result<()> {
        let values = [self.red, self.green, self.blue];
        for (name, value) in Self::COMPONENT_NAMES.iter().zip(values) {
            node.set_attribute(*name, value.to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rgb() {
        let color = RgbColor::from_components(&[0.2, 0.4, 0.6], true).unwrap();
        assert_eq!(color.red, 0.2);
        assert_eq!(color.green, 0.4);
        assert_eq!(color.blue, 0.6);
    }

    #[test]
    fn test_wrong_arity() {
        assert!(RgbColor::from_components(&[], true).is_none());
        assert!(RgbColor::from_components(&[0.1, 0.2], true).is_none());
        assert!(RgbColor::from_components(&[0.1, 0.2, 0.3, 0.4], false).is_none());
    }

    #[test]
    fn test_range_depends_on_strictness() {
        assert!(RgbColor::from_components(&[1.5, 0.0, 0.0], true).is_none());
        assert!(RgbColor::from_components(&[1.5, 0.0, 0.0], false).is_some());
        assert!(RgbColor::from_components(&[0.0, -0.1, 0.0], true).is_none());
        assert!(RgbColor::from_components(&[0.0, 1.0, 0.0], true).is_some());
    }

    #[test]
    fn test_non_finite_always_rejected() {
        assert!(RgbColor::from_components(&[f64::NAN, 0.0, 0.0], false).is_none());
        assert!(RgbColor::from_components(&[0.0, f64::INFINITY, 0.0], false).is_none());
    }

    #[test]
    fn test_write_attributes() {
        let mut node = ReportNode::new("color").unwrap();
        RgbColor::from_components(&[0.2, 0.4, 1.0], true)
            .unwrap()
            .write_attributes(&mut node)
            .unwrap();

        assert_eq!(node.attribute("red"), Some("0.2"));
        assert_eq!(node.attribute("green"), Some("0.4"));
        assert_eq!(node.attribute("blue"), Some("1"));
        let keys: Vec<&str> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, RgbColor::COMPONENT_NAMES);
    }
}
