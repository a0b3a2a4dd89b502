//! Static build catalogs.
//!
//! Closed enumerations describing what can be built: structure archetypes
//! grouped into categories, material palettes, size multipliers and style
//! labels. Pure data; the geometry itself lives in [`crate::generator`].

use crate::block::Block;

/// UI grouping for archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Buildings,
    Agricultural,
    Infrastructure,
    Decorative,
    Custom,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Buildings => "Buildings",
            Category::Agricultural => "Agricultural",
            Category::Infrastructure => "Infrastructure",
            Category::Decorative => "Decorative",
            Category::Custom => "Custom",
        }
    }
}

/// One structure kind the generator library knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    House,
    Mansion,
    Tower,
    Castle,
    Farm,
    Bridge,
    Road,
    Wall,
    Fountain,
    Treehouse,
    Custom,
}

impl Archetype {
    pub const ALL: [Archetype; 11] = [
        Archetype::House,
        Archetype::Mansion,
        Archetype::Tower,
        Archetype::Castle,
        Archetype::Farm,
        Archetype::Bridge,
        Archetype::Road,
        Archetype::Wall,
        Archetype::Fountain,
        Archetype::Treehouse,
        Archetype::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Archetype::House => "House",
            Archetype::Mansion => "Mansion",
            Archetype::Tower => "Tower",
            Archetype::Castle => "Castle",
            Archetype::Farm => "Farm",
            Archetype::Bridge => "Bridge",
            Archetype::Road => "Road",
            Archetype::Wall => "Wall",
            Archetype::Fountain => "Fountain",
            Archetype::Treehouse => "Treehouse",
            Archetype::Custom => "Custom Structure",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Archetype::House | Archetype::Mansion | Archetype::Tower | Archetype::Castle => {
                Category::Buildings
            }
            Archetype::Farm => Category::Agricultural,
            Archetype::Bridge | Archetype::Road | Archetype::Wall => Category::Infrastructure,
            Archetype::Fountain | Archetype::Treehouse => Category::Decorative,
            Archetype::Custom => Category::Custom,
        }
    }
}

/// The three block roles a material palette provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Block,
    pub secondary: Block,
    pub decorative: Block,
}

/// One of the nine material palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Wood,
    Stone,
    Brick,
    Glass,
    Sandstone,
    DarkWood,
    Quartz,
    Prismarine,
    Concrete,
}

impl Material {
    pub const ALL: [Material; 9] = [
        Material::Wood,
        Material::Stone,
        Material::Brick,
        Material::Glass,
        Material::Sandstone,
        Material::DarkWood,
        Material::Quartz,
        Material::Prismarine,
        Material::Concrete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Material::Wood => "Wood",
            Material::Stone => "Stone",
            Material::Brick => "Brick",
            Material::Glass => "Glass",
            Material::Sandstone => "Sandstone",
            Material::DarkWood => "Dark Wood",
            Material::Quartz => "Quartz",
            Material::Prismarine => "Prismarine",
            Material::Concrete => "Concrete",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Material::Wood => Palette {
                primary: Block::Planks,
                secondary: Block::Log,
                decorative: Block::Fence,
            },
            Material::Stone => Palette {
                primary: Block::Stone,
                secondary: Block::Cobblestone,
                decorative: Block::StoneBricks,
            },
            Material::Brick => Palette {
                primary: Block::Bricks,
                secondary: Block::RedSandstone,
                decorative: Block::BrickTiles,
            },
            Material::Glass => Palette {
                primary: Block::Glass,
                secondary: Block::TintedGlass,
                decorative: Block::GlassPane,
            },
            Material::Sandstone => Palette {
                primary: Block::Sandstone,
                secondary: Block::SmoothSandstone,
                decorative: Block::CutSandstone,
            },
            Material::DarkWood => Palette {
                primary: Block::DarkPlanks,
                secondary: Block::DarkLog,
                decorative: Block::DarkFence,
            },
            Material::Quartz => Palette {
                primary: Block::Quartz,
                secondary: Block::QuartzPillar,
                decorative: Block::CarvedQuartz,
            },
            Material::Prismarine => Palette {
                primary: Block::Prismarine,
                secondary: Block::PrismarineBricks,
                decorative: Block::DarkPrismarine,
            },
            Material::Concrete => Palette {
                primary: Block::WhiteConcrete,
                secondary: Block::LightGrayConcrete,
                decorative: Block::GrayConcrete,
            },
        }
    }

    /// Next palette in UI cycling order, wrapping around.
    pub fn next(self) -> Material {
        let idx = Material::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Material::ALL[(idx + 1) % Material::ALL.len()]
    }
}

/// Scalar multiplier applied per axis to an archetype's base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::ExtraLarge];

    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::ExtraLarge => "Extra Large",
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            Size::Small => 0.5,
            Size::Medium => 1.0,
            Size::Large => 1.5,
            Size::ExtraLarge => 2.0,
        }
    }

    pub fn next(self) -> Size {
        let idx = Size::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Size::ALL[(idx + 1) % Size::ALL.len()]
    }
}

/// Architectural style label. Currently descriptive only; no generator
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Standard,
    Modern,
    Medieval,
    Rustic,
    Futuristic,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Standard,
        Style::Modern,
        Style::Medieval,
        Style::Rustic,
        Style::Futuristic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Style::Standard => "Standard",
            Style::Modern => "Modern",
            Style::Medieval => "Medieval",
            Style::Rustic => "Rustic",
            Style::Futuristic => "Futuristic",
        }
    }

    pub fn next(self) -> Style {
        let idx = Style::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Style::ALL[(idx + 1) % Style::ALL.len()]
    }
}
