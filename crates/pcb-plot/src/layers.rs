use serde::{Deserialize, Serialize};

/// One physical or logical board layer selectable for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    FrontCopper,
    /// Inner copper layer, 1-based ordinal counted from the front.
    InnerCopper(u32),
    BackCopper,
    FrontAdhesive,
    BackAdhesive,
    FrontPaste,
    BackPaste,
    FrontSilkscreen,
    BackSilkscreen,
    FrontMask,
    BackMask,
    EdgeCuts,
    UserDrawings,
    UserComments,
    UserEco1,
    UserEco2,
    FrontFab,
    BackFab,
    /// A layer this module has no specific knowledge of.
    Other,
}

/// Whether a plotted image represents presence or absence of material.
///
/// Only meaningful for material layers (copper, mask, legend, ...);
/// documentation layers carry no polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePolarity {
    Positive,
    Negative,
    None,
}

/// Per-layer classification facts. Single source of truth for the legacy
/// extension, the FileFunction label and the polarity of a layer.
struct LayerClass {
    protel_extension: String,
    function: String,
    polarity: FilePolarity,
}

impl LayerClass {
    fn fixed(ext: &str, function: &str, polarity: FilePolarity) -> Self {
        LayerClass {
            protel_extension: ext.to_string(),
            function: function.to_string(),
            polarity,
        }
    }
}

/// Classify a layer. `copper_layer_count` only affects the FileFunction
/// label of the back copper layer.
fn classification(layer: Layer, copper_layer_count: u32) -> LayerClass {
    use FilePolarity::{Negative, None, Positive};

    match layer {
        Layer::FrontCopper => LayerClass::fixed("gtl", "Copper,L1,Top", Positive),
        Layer::BackCopper => LayerClass {
            protel_extension: "gbl".to_string(),
            function: format!("Copper,L{},Bot", copper_layer_count),
            polarity: Positive,
        },
        Layer::InnerCopper(n) => LayerClass {
            protel_extension: format!("g{}", n + 1),
            function: format!("Copper,L{},Inr", n + 1),
            polarity: Positive,
        },
        Layer::FrontAdhesive => LayerClass::fixed("gta", "Glue,Top", Positive),
        Layer::BackAdhesive => LayerClass::fixed("gba", "Glue,Bot", Positive),
        Layer::FrontPaste => LayerClass::fixed("gtp", "Paste,Top", Positive),
        Layer::BackPaste => LayerClass::fixed("gbp", "Paste,Bot", Positive),
        Layer::FrontSilkscreen => LayerClass::fixed("gto", "Legend,Top", Positive),
        Layer::BackSilkscreen => LayerClass::fixed("gbo", "Legend,Bot", Positive),
        Layer::FrontMask => LayerClass::fixed("gts", "Soldermask,Top", Negative),
        Layer::BackMask => LayerClass::fixed("gbs", "Soldermask,Bot", Negative),
        // Board outlines can in principle be plated ("Profile,P") but
        // that case is not modeled; the profile is always reported as
        // not plated.
        Layer::EdgeCuts => LayerClass::fixed("gm1", "Profile,NP", None),
        Layer::UserDrawings => LayerClass::fixed("gbr", "Drawing", None),
        Layer::UserComments => LayerClass::fixed("gbr", "Other,Comment", None),
        Layer::UserEco1 => LayerClass::fixed("gbr", "Other,ECO1", None),
        Layer::UserEco2 => LayerClass::fixed("gbr", "Other,ECO2", None),
        Layer::FrontFab => LayerClass::fixed("gbr", "Other,Fab,Top", None),
        Layer::BackFab => LayerClass::fixed("gbr", "Other,Fab,Bot", None),
        Layer::Other => LayerClass::fixed("gbr", "Other,User", None),
    }
}

impl Layer {
    pub fn is_copper(self) -> bool {
        matches!(
            self,
            Layer::FrontCopper | Layer::InnerCopper(_) | Layer::BackCopper
        )
    }

    pub fn is_user(self) -> bool {
        matches!(
            self,
            Layer::UserDrawings | Layer::UserComments | Layer::UserEco1 | Layer::UserEco2
        )
    }

    /// Historical Protel/Altium file extension for this layer.
    ///
    /// `gtl`/`gbl` for outer copper, `g<N+1>` for inner copper, a fixed
    /// three-letter code per non-copper layer. Layers without a
    /// convention of their own get the generic `gbr`.
    pub fn protel_extension(self) -> String {
        classification(self, 0).protel_extension
    }

    /// Full `%TF.FileFunction,<value>*%` attribute line for this layer.
    pub fn file_function_attribute(self, copper_layer_count: u32) -> String {
        format!(
            "%TF.FileFunction,{}*%",
            classification(self, copper_layer_count).function
        )
    }

    /// Polarity of the material pattern this layer represents.
    pub fn polarity(self) -> FilePolarity {
        classification(self, 0).polarity
    }

    /// Full `%TF.FilePolarity,...*%` attribute line, or an empty string
    /// for layers that do not use a polarity.
    pub fn file_polarity_attribute(self) -> String {
        match self.polarity() {
            FilePolarity::Positive => "%TF.FilePolarity,Positive*%".to_string(),
            FilePolarity::Negative => "%TF.FilePolarity,Negative*%".to_string(),
            FilePolarity::None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LAYERS: &[Layer] = &[
        Layer::FrontCopper,
        Layer::InnerCopper(1),
        Layer::InnerCopper(2),
        Layer::BackCopper,
        Layer::FrontAdhesive,
        Layer::BackAdhesive,
        Layer::FrontPaste,
        Layer::BackPaste,
        Layer::FrontSilkscreen,
        Layer::BackSilkscreen,
        Layer::FrontMask,
        Layer::BackMask,
        Layer::EdgeCuts,
        Layer::UserDrawings,
        Layer::UserComments,
        Layer::UserEco1,
        Layer::UserEco2,
        Layer::FrontFab,
        Layer::BackFab,
        Layer::Other,
    ];

    #[test]
    fn test_protel_extension_copper() {
        assert_eq!(Layer::FrontCopper.protel_extension(), "gtl");
        assert_eq!(Layer::BackCopper.protel_extension(), "gbl");
        assert_eq!(Layer::InnerCopper(1).protel_extension(), "g2");
        assert_eq!(Layer::InnerCopper(4).protel_extension(), "g5");
    }

    #[test]
    fn test_protel_extension_non_copper() {
        assert_eq!(Layer::FrontAdhesive.protel_extension(), "gta");
        assert_eq!(Layer::BackAdhesive.protel_extension(), "gba");
        assert_eq!(Layer::FrontPaste.protel_extension(), "gtp");
        assert_eq!(Layer::BackPaste.protel_extension(), "gbp");
        assert_eq!(Layer::FrontSilkscreen.protel_extension(), "gto");
        assert_eq!(Layer::BackSilkscreen.protel_extension(), "gbo");
        assert_eq!(Layer::FrontMask.protel_extension(), "gts");
        assert_eq!(Layer::BackMask.protel_extension(), "gbs");
        assert_eq!(Layer::EdgeCuts.protel_extension(), "gm1");
    }

    #[test]
    fn test_protel_extension_fallback() {
        assert_eq!(Layer::UserDrawings.protel_extension(), "gbr");
        assert_eq!(Layer::UserComments.protel_extension(), "gbr");
        assert_eq!(Layer::FrontFab.protel_extension(), "gbr");
        assert_eq!(Layer::Other.protel_extension(), "gbr");
    }

    #[test]
    fn test_file_function_copper() {
        assert_eq!(
            Layer::FrontCopper.file_function_attribute(6),
            "%TF.FileFunction,Copper,L1,Top*%"
        );
        assert_eq!(
            Layer::BackCopper.file_function_attribute(6),
            "%TF.FileFunction,Copper,L6,Bot*%"
        );
        assert_eq!(
            Layer::InnerCopper(2).file_function_attribute(6),
            "%TF.FileFunction,Copper,L3,Inr*%"
        );
    }

    #[test]
    fn test_file_function_named_layers() {
        assert_eq!(
            Layer::FrontSilkscreen.file_function_attribute(2),
            "%TF.FileFunction,Legend,Top*%"
        );
        assert_eq!(
            Layer::BackMask.file_function_attribute(2),
            "%TF.FileFunction,Soldermask,Bot*%"
        );
        assert_eq!(
            Layer::EdgeCuts.file_function_attribute(2),
            "%TF.FileFunction,Profile,NP*%"
        );
        assert_eq!(
            Layer::Other.file_function_attribute(2),
            "%TF.FileFunction,Other,User*%"
        );
    }

    #[test]
    fn test_file_function_never_empty_and_delimited() {
        for &layer in ALL_LAYERS {
            let attr = layer.file_function_attribute(4);
            assert!(attr.starts_with("%TF.FileFunction,"));
            assert!(attr.ends_with("*%"));
            // No raw '%' beyond the two delimiters.
            assert_eq!(attr.matches('%').count(), 2, "{attr}");
            let payload = &attr["%TF.FileFunction,".len()..attr.len() - 2];
            assert!(!payload.is_empty());
        }
    }

    #[test]
    fn test_polarity_partition() {
        for &layer in ALL_LAYERS {
            let attr = layer.file_polarity_attribute();
            let material = layer.is_copper()
                || matches!(
                    layer,
                    Layer::FrontAdhesive
                        | Layer::BackAdhesive
                        | Layer::FrontPaste
                        | Layer::BackPaste
                        | Layer::FrontSilkscreen
                        | Layer::BackSilkscreen
                        | Layer::FrontMask
                        | Layer::BackMask
                );
            assert_eq!(attr.is_empty(), !material, "{layer:?}");
        }
    }

    #[test]
    fn test_polarity_values() {
        assert_eq!(
            Layer::FrontCopper.file_polarity_attribute(),
            "%TF.FilePolarity,Positive*%"
        );
        assert_eq!(
            Layer::FrontMask.file_polarity_attribute(),
            "%TF.FilePolarity,Negative*%"
        );
        assert_eq!(Layer::EdgeCuts.file_polarity_attribute(), "");
    }

    #[test]
    fn test_layer_queries() {
        assert!(Layer::InnerCopper(3).is_copper());
        assert!(!Layer::FrontMask.is_copper());
        assert!(Layer::UserEco2.is_user());
        assert!(!Layer::EdgeCuts.is_user());
    }
}
