use super::common::{MenuChoice, Quality};
use serde::{Deserialize, Serialize};

/// Nova Canvas request body, tagged by `taskType`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "taskType")]
pub enum CanvasRequest {
    #[serde(rename = "VIRTUAL_TRY_ON", rename_all = "camelCase")]
    VirtualTryOn {
        virtual_try_on_params: VirtualTryOnParams,
        image_generation_config: ImageGenerationConfig,
    },
    #[serde(rename = "TEXT_IMAGE", rename_all = "camelCase")]
    TextImage {
        text_to_image_params: TextToImageParams,
        image_generation_config: ImageGenerationConfig,
    },
}

impl CanvasRequest {
    pub fn task_type(&self) -> &'static str {
        match self {
            CanvasRequest::VirtualTryOn { .. } => "VIRTUAL_TRY_ON",
            CanvasRequest::TextImage { .. } => "TEXT_IMAGE",
        }
    }

    pub fn generation_config(&self) -> &ImageGenerationConfig {
        match self {
            CanvasRequest::VirtualTryOn {
                image_generation_config,
                ..
            }
            | CanvasRequest::TextImage {
                image_generation_config,
                ..
            } => image_generation_config,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualTryOnParams {
    pub source_image: String,
    pub reference_image: String,
    pub mask_type: MaskType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_based_mask: Option<GarmentBasedMask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_based_mask: Option<PromptBasedMask>,
}

impl VirtualTryOnParams {
    /// Mask the region occupied by a garment class.
    pub fn garment(source_image: String, reference_image: String, class: GarmentClass) -> Self {
        Self {
            source_image,
            reference_image,
            mask_type: MaskType::Garment,
            garment_based_mask: Some(GarmentBasedMask {
                garment_class: class,
            }),
            prompt_based_mask: None,
        }
    }

    /// Mask whatever region the prompt describes.
    pub fn prompt(
        source_image: String,
        reference_image: String,
        mask_prompt: impl Into<String>,
        mask_shape: MaskShape,
    ) -> Self {
        Self {
            source_image,
            reference_image,
            mask_type: MaskType::Prompt,
            garment_based_mask: None,
            prompt_based_mask: Some(PromptBasedMask {
                mask_shape,
                mask_prompt: mask_prompt.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaskType {
    Garment,
    Prompt,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GarmentBasedMask {
    pub garment_class: GarmentClass,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptBasedMask {
    pub mask_shape: MaskShape,
    pub mask_prompt: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaskShape {
    #[default]
    Default,
    BoundingBox,
    Contour,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GarmentClass {
    UpperBody,
    LowerBody,
    Footwear,
    FullBody,
}

impl MenuChoice for GarmentClass {
    const ALL: &'static [Self] = &[
        GarmentClass::UpperBody,
        GarmentClass::LowerBody,
        GarmentClass::Footwear,
        GarmentClass::FullBody,
    ];

    fn label(&self) -> &'static str {
        match self {
            GarmentClass::UpperBody => "Upper Body (shirts, jackets, etc.)",
            GarmentClass::LowerBody => "Lower Body (pants, skirts, etc.)",
            GarmentClass::Footwear => "Footwear",
            GarmentClass::FullBody => "Full Body (jumpsuits, etc.)",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            GarmentClass::UpperBody => "UPPER_BODY",
            GarmentClass::LowerBody => "LOWER_BODY",
            GarmentClass::Footwear => "FOOTWEAR",
            GarmentClass::FullBody => "FULL_BODY",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VisualStyle {
    #[serde(rename = "3D_ANIMATED_FAMILY_FILM")]
    AnimatedFamilyFilm,
    #[serde(rename = "DESIGN_SKETCH")]
    DesignSketch,
    #[serde(rename = "FLAT_VECTOR_ILLUSTRATION")]
    FlatVectorIllustration,
    #[serde(rename = "GRAPHIC_NOVEL_ILLUSTRATION")]
    GraphicNovelIllustration,
    #[serde(rename = "MAXIMALISM")]
    Maximalism,
    #[serde(rename = "MIDCENTURY_RETRO")]
    MidcenturyRetro,
    #[serde(rename = "PHOTOREALISM")]
    Photorealism,
    #[serde(rename = "SOFT_DIGITAL_PAINTING")]
    SoftDigitalPainting,
}

impl MenuChoice for VisualStyle {
    const ALL: &'static [Self] = &[
        VisualStyle::AnimatedFamilyFilm,
        VisualStyle::DesignSketch,
        VisualStyle::FlatVectorIllustration,
        VisualStyle::GraphicNovelIllustration,
        VisualStyle::Maximalism,
        VisualStyle::MidcenturyRetro,
        VisualStyle::Photorealism,
        VisualStyle::SoftDigitalPainting,
    ];

    fn label(&self) -> &'static str {
        match self {
            VisualStyle::AnimatedFamilyFilm => "3D Animated Family Film",
            VisualStyle::DesignSketch => "Design Sketch",
            VisualStyle::FlatVectorIllustration => "Flat Vector Illustration",
            VisualStyle::GraphicNovelIllustration => "Graphic Novel Illustration",
            VisualStyle::Maximalism => "Maximalism",
            VisualStyle::MidcenturyRetro => "Midcentury Retro",
            VisualStyle::Photorealism => "Photorealism",
            VisualStyle::SoftDigitalPainting => "Soft Digital Painting",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            VisualStyle::AnimatedFamilyFilm => "3D_ANIMATED_FAMILY_FILM",
            VisualStyle::DesignSketch => "DESIGN_SKETCH",
            VisualStyle::FlatVectorIllustration => "FLAT_VECTOR_ILLUSTRATION",
            VisualStyle::GraphicNovelIllustration => "GRAPHIC_NOVEL_ILLUSTRATION",
            VisualStyle::Maximalism => "MAXIMALISM",
            VisualStyle::MidcenturyRetro => "MIDCENTURY_RETRO",
            VisualStyle::Photorealism => "PHOTOREALISM",
            VisualStyle::SoftDigitalPainting => "SOFT_DIGITAL_PAINTING",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextToImageParams {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<VisualStyle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationConfig {
    pub number_of_images: u32,
    pub quality: Quality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for ImageGenerationConfig {
    fn default() -> Self {
        Self {
            number_of_images: 1,
            quality: Quality::Standard,
            height: None,
            width: None,
            cfg_scale: None,
            seed: None,
        }
    }
}

impl ImageGenerationConfig {
    pub fn with_images(mut self, count: u32) -> Self {
        self.number_of_images = count;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_cfg_scale(mut self, cfg_scale: f32) -> Self {
        self.cfg_scale = Some(cfg_scale);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Nova Canvas response body. Either list may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CanvasResponse {
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}
