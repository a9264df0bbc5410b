//! Loot catalog: the fixed registry of catchable templates, grouped by rarity.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::distribution::RarityDistribution;
use super::types::{LootTemplate, Rarity};

/// Built-in catalog, ten templates per rarity. Some names appear under two
/// rarities with different descriptions.
pub const DEFAULT_CATALOG: [(&str, Rarity, &str); 80] = [
    // Trash
    ("Plastic Bag", Rarity::Trash, "A discarded plastic bag floating in the water."),
    ("Old Shoe", Rarity::Trash, "An old, worn-out shoe that's been thrown into the water."),
    ("Broken Bottle", Rarity::Trash, "A shattered glass bottle, lost and forgotten."),
    ("Rusty Can", Rarity::Trash, "A rusty can, once holding something edible."),
    ("Fishing Line", Rarity::Trash, "A tangled mess of old fishing line."),
    ("Wooden Plank", Rarity::Trash, "A piece of driftwood, worn smooth by the water."),
    ("Empty Can", Rarity::Trash, "An empty can, discarded and forgotten."),
    ("Discarded Net", Rarity::Trash, "An old fishing net, tangled and useless."),
    ("Torn Bag", Rarity::Trash, "A bag ripped apart and left to float."),
    ("Worn Tire", Rarity::Trash, "A worn-out tire, floating aimlessly."),
    // Common
    ("Goldfish", Rarity::Common, "A small, shiny goldfish. Commonly found in ponds."),
    (
        "Bluegill",
        Rarity::Common,
        "A small, panfish with a blueish tint, found in freshwater lakes.",
    ),
    ("Sunfish", Rarity::Common, "A small, colorful fish often found in ponds and lakes."),
    ("Perch", Rarity::Common, "A striped fish found in lakes and rivers."),
    ("Tilapia", Rarity::Common, "A freshwater fish known for its mild flavor."),
    ("Carp", Rarity::Common, "A large fish found in many rivers and ponds."),
    ("Bass", Rarity::Common, "A popular sport fish found in lakes and rivers."),
    ("Trout", Rarity::Common, "A common fish found in clear, cold streams and rivers."),
    ("Catfish", Rarity::Common, "A bottom-dwelling fish with whisker-like barbels."),
    ("Pike", Rarity::Common, "A long, predatory fish found in freshwater lakes."),
    // Uncommon
    ("Catfish", Rarity::Uncommon, "A large fish with a whiskery face. Often found in rivers."),
    (
        "Largemouth Bass",
        Rarity::Uncommon,
        "A predatory fish known for its large mouth and fighting spirit.",
    ),
    ("Walleye", Rarity::Uncommon, "A freshwater fish with large eyes, known for its sharp teeth."),
    ("Smallmouth Bass", Rarity::Uncommon, "A fish known for its fighting ability and small mouth."),
    ("Northern Pike", Rarity::Uncommon, "A predatory fish with sharp teeth and a long body."),
    ("Paddlefish", Rarity::Uncommon, "A fish known for its long, paddle-like snout."),
    ("Muskellunge", Rarity::Uncommon, "A large, elusive predator found in North American lakes."),
    (
        "Steelhead Trout",
        Rarity::Uncommon,
        "A migratory fish known for its strength and fighting ability.",
    ),
    (
        "Sauger",
        Rarity::Uncommon,
        "A fish closely related to the walleye, found in rivers and lakes.",
    ),
    (
        "Lake Sturgeon",
        Rarity::Uncommon,
        "A prehistoric fish known for its bony plates and long lifespan.",
    ),
    // Rare
    (
        "Rainbow Trout",
        Rarity::Rare,
        "A colorful trout with vibrant stripes. A rare catch in clear lakes.",
    ),
    ("Arapaima", Rarity::Rare, "A giant fish native to the Amazon River, known for its size."),
    ("Tiger Trout", Rarity::Rare, "A hybrid trout known for its striking pattern."),
    ("Golden Dorado", Rarity::Rare, "A powerful predator with a golden sheen."),
    ("Grouper", Rarity::Rare, "A large fish with a robust body, found in tropical waters."),
    ("Rohu", Rarity::Rare, "A large freshwater fish native to South Asia."),
    ("Napoleon Wrasse", Rarity::Rare, "A large, colorful fish found in the Indo-Pacific region."),
    ("Red Drum", Rarity::Rare, "A prized fish known for its distinctive red coloration."),
    ("Swordfish", Rarity::Rare, "A large fish known for its long, sword-like bill."),
    (
        "Bluefin Tuna",
        Rarity::Rare,
        "A large, fast tuna known for its blue coloration and high value.",
    ),
    // Epic
    (
        "Goliath Grouper",
        Rarity::Epic,
        "A massive, intimidating fish. Known for its strength and size.",
    ),
    ("Manta Ray", Rarity::Epic, "A large, graceful ray known for its wide wingspan."),
    ("Giant Squid", Rarity::Epic, "A colossal squid known for its size and elusive nature."),
    (
        "Koi Fish",
        Rarity::Epic,
        "A large ornamental fish known for its vibrant colors and patterns.",
    ),
    ("Great White Shark", Rarity::Epic, "A formidable predator known for its size and power."),
    (
        "Orca",
        Rarity::Epic,
        "A powerful marine mammal known for its intelligence and hunting skills.",
    ),
    ("Hammerhead Shark", Rarity::Epic, "A shark known for its distinctive hammer-shaped head."),
    (
        "Beluga Sturgeon",
        Rarity::Epic,
        "A rare sturgeon known for its large size and valuable caviar.",
    ),
    (
        "Blue Marlin",
        Rarity::Epic,
        "A large, fast fish known for its impressive bill and fighting ability.",
    ),
    (
        "Megalodon Tooth",
        Rarity::Epic,
        "A fossilized tooth from the ancient and massive Megalodon shark.",
    ),
    // Supreme
    ("BoomFish", Rarity::Supreme, "BadaBOOOM."),
    ("Electra", Rarity::Supreme, "A mythical fish said to harness the power of lightning."),
    (
        "Inferno Fish",
        Rarity::Supreme,
        "A fish that supposedly burns with the fire of a thousand suns.",
    ),
    (
        "Frost Dragon Fish",
        Rarity::Supreme,
        "A fish from the icy realms, known for its freezing breath.",
    ),
    ("Celestial Koi", Rarity::Supreme, "A koi with scales that sparkle like the night sky."),
    ("Tornado Fish", Rarity::Supreme, "A fish said to create whirlwinds in the water."),
    ("Vortex Eel", Rarity::Supreme, "An eel known for its ability to create whirlpools."),
    ("Phantom Ray", Rarity::Supreme, "A ray that appears and disappears like a ghost."),
    ("Storm Shark", Rarity::Supreme, "A shark known to accompany thunderstorms."),
    ("Phoenix Fish", Rarity::Supreme, "A mythical fish said to rise from the ashes."),
    // Mythical
    ("Diamond Fish", Rarity::Mythical, "That is Pricy."),
    ("Leviathan", Rarity::Mythical, "A colossal sea creature from ancient legends."),
    ("Kraken", Rarity::Mythical, "A giant squid-like creature feared by sailors."),
    ("Hydra", Rarity::Mythical, "A multi-headed serpent with regenerative abilities."),
    ("Triton's Trident Fish", Rarity::Mythical, "A fish said to be blessed by the god of the sea."),
    (
        "Mermaid's Tear",
        Rarity::Mythical,
        "A gem said to be the tear of a mermaid, found in the sea.",
    ),
    ("Eldritch Whale", Rarity::Mythical, "A whale from deep, dark corners of the ocean."),
    ("Abyssal Fish", Rarity::Mythical, "A fish from the deepest, darkest depths of the sea."),
    (
        "Celestial Jellyfish",
        Rarity::Mythical,
        "A glowing jellyfish said to be a gift from the stars.",
    ),
    ("Astral Shark", Rarity::Mythical, "A shark with a celestial pattern across its body."),
    // Legendary
    (
        "Dragonfish",
        Rarity::Legendary,
        "A mythical fish with scales that shimmer like dragon scales. Extremely rare and valuable.",
    ),
    ("Kraken", Rarity::Legendary, "A legendary sea monster known for its immense size and power."),
    (
        "Poseidon's Trident",
        Rarity::Legendary,
        "A powerful trident said to be wielded by the god of the sea.",
    ),
    (
        "Phoenix Fish",
        Rarity::Legendary,
        "A fish that rises from the ashes, said to bring good fortune.",
    ),
    ("Leviathan", Rarity::Legendary, "An ancient sea creature of immense size and strength."),
    (
        "Golden Sea Serpent",
        Rarity::Legendary,
        "A rare and majestic sea serpent covered in golden scales.",
    ),
    (
        "Eldritch Kraken",
        Rarity::Legendary,
        "A monstrous kraken from the darkest depths of the ocean.",
    ),
    (
        "Celestial Dragonfish",
        Rarity::Legendary,
        "A dragonfish with celestial powers and a mythical aura.",
    ),
    (
        "Titanic Shark",
        Rarity::Legendary,
        "An enormous shark that rules the oceans with unmatched strength.",
    ),
    (
        "Mystic Mermaid",
        Rarity::Legendary,
        "A mythical mermaid with unparalleled beauty and magical abilities.",
    ),
];

/// Registry of loot templates in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootCatalog {
    templates: Vec<LootTemplate>,
}

impl LootCatalog {
    pub fn new(templates: Vec<LootTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[LootTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All templates tagged with `rarity`, in declaration order.
    pub fn candidates_for(&self, rarity: Rarity) -> Vec<&LootTemplate> {
        self.templates
            .iter()
            .filter(|t| t.rarity == rarity)
            .collect()
    }

    /// Picks one candidate uniformly. `None` when the rarity has no templates.
    pub fn choose(&self, rarity: Rarity, rng: &mut impl Rng) -> Option<&LootTemplate> {
        self.candidates_for(rarity).choose(rng).copied()
    }

    /// Looks up a template by name within a rarity (names repeat across tiers).
    pub fn find(&self, name: &str, rarity: Rarity) -> Option<&LootTemplate> {
        self.templates
            .iter()
            .find(|t| t.rarity == rarity && t.name.eq_ignore_ascii_case(name))
    }

    /// Rarities with at least one template.
    pub fn rarities(&self) -> BTreeSet<Rarity> {
        self.templates.iter().map(|t| t.rarity).collect()
    }

    /// Rarities the distribution can sample that have no template here.
    pub fn missing_rarities(&self, distribution: &RarityDistribution) -> Vec<Rarity> {
        let covered = self.rarities();
        distribution
            .rarities()
            .filter(|r| !covered.contains(r))
            .collect()
    }
}

impl Default for LootCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATALOG
                .iter()
                .map(|(name, rarity, description)| LootTemplate::new(*name, *rarity, *description))
                .collect(),
        )
    }
}
