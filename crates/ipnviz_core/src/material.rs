use crate::color::Rgb;

/// One textured surface of a body.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureLayer {
    pub color_map: String,
    pub double_sided: bool,
    /// Flat colour for renderers that do not sample textures.
    pub tint: Rgb,
}

impl TextureLayer {
    /// Opaque front-facing layer backed by `/textures/{name}_color.jpg`.
    pub fn color(name: &str, tint: Rgb) -> Self {
        Self {
            color_map: format!("/textures/{name}_color.jpg"),
            double_sided: false,
            tint,
        }
    }

    /// Same colour map, visible from both faces. Flat geometry such as a
    /// ring needs this to show from below.
    pub fn double_sided(name: &str, tint: Rgb) -> Self {
        Self {
            double_sided: true,
            ..Self::color(name, tint)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Flat(Rgb),
    Textured(TextureLayer),
    /// Several layers over the same sphere, first one being the body itself.
    Layered(Vec<TextureLayer>),
}

impl Material {
    pub fn tint(&self) -> Rgb {
        match self {
            Material::Flat(color) => *color,
            Material::Textured(layer) => layer.tint,
            Material::Layered(layers) => layers.first().map(|l| l.tint).unwrap_or_default(),
        }
    }

    pub fn layers(&self) -> &[TextureLayer] {
        match self {
            Material::Flat(_) => &[],
            Material::Textured(layer) => std::slice::from_ref(layer),
            Material::Layered(layers) => layers,
        }
    }
}
