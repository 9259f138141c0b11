//! Army roster data structures

/// Magic bytes at the start of every army roster.
pub const MAGIC: [u8; 4] = [0x9E, 0x02, 0x00, 0x00];

/// Size in bytes of the roster header
pub const HEADER_SIZE: usize = 192;

/// Size in bytes of the save-game prefix that precedes the roster in
/// save files
pub const SAVE_PREFIX_SIZE: usize = 504;

/// Smallest regiment record the decoder can make sense of; every known
/// file declares exactly this size
pub const REGIMENT_RECORD_MIN_SIZE: usize = 188;

/// Magic-item slot value meaning the regiment cannot use that slot
pub const MAGIC_ITEM_SLOT_DISABLED: u16 = u16::MAX;

/// Roster header
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Header {
    /// Format field, the low half of the magic
    pub format: u16,
    /// Number of regiment records that follow the header
    pub regiment_count: u16,
    /// Size in bytes of each regiment record
    pub regiment_record_size: u16,
    /// Race of the army as a whole
    pub race: u8,
    /// Three bytes of unknown purpose after the race
    pub unknown1: [u8; 3],
    /// Two-byte default-name field, empty in every known file
    pub default_name: String,
    /// Player-given army name, only set in save games
    pub army_name: String,
    /// Path of the small banner sprite, `[BOOKS]`-relative
    pub small_banner_path: String,
    /// Path of the greyed-out small banner sprite
    pub small_banner_disabled_path: String,
    /// Path of the large banner sprite
    pub large_banner_path: String,
    /// Gold collected from treasures
    pub gold_from_treasures: u16,
    /// Gold currently in the coffers
    pub gold_in_coffers: u16,
    /// Magic-item inventory bytes, 40 on disk
    pub magic_items: Vec<u8>,
    /// Two trailing bytes of unknown purpose
    pub unknown2: [u8; 2],
}

/// A fully decoded army roster
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Army {
    /// The roster header
    pub header: Header,
    /// All regiments in file order
    pub regiments: Vec<Regiment>,
    /// The raw save-game prefix when the roster came from a save file
    pub save_prefix: Option<Vec<u8>>,
}

impl Army {
    /// Number of regiments in the roster
    #[must_use]
    pub fn regiment_count(&self) -> usize {
        self.regiments.len()
    }

    /// Whether the roster was framed as a save game
    #[must_use]
    pub fn is_save_game(&self) -> bool {
        self.save_prefix.is_some()
    }
}

/// The nine stat-line attributes shared by troops and leaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TroopAttributes {
    /// Movement allowance
    pub movement: u8,
    /// Weapon skill
    pub weapon_skill: u8,
    /// Ballistic skill
    pub ballistic_skill: u8,
    /// Strength
    pub strength: u8,
    /// Toughness
    pub toughness: u8,
    /// Wounds
    pub wounds: u8,
    /// Initiative
    pub initiative: u8,
    /// Number of attacks
    pub attacks: u8,
    /// Leadership
    pub leadership: u8,
}

/// A regiment's leader
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Leader {
    /// Index into the executable's sprite name table for the leader's
    /// sprite; resolve it with [`crate::engrel::read_sprite_name`]
    pub sprite_index: u16,
    /// Name of the leader, e.g. "Morgan Bernhardt"
    pub name: String,
    /// Stat line
    pub attributes: TroopAttributes,
    /// Mount kind
    pub mount: u8,
    /// Armour kind
    pub armour: u8,
    /// Weapon kind
    pub weapon: u8,
    /// Unit-class byte, same packing as [`Regiment::class`]
    pub unit_class: u8,
    /// Point value
    pub point_value: u8,
    /// Missile weapon kind
    pub missile_weapon: u8,
    /// The leader's 3D head ID
    pub head_id: u16,
    /// Raw x field
    pub x: [u8; 4],
    /// Raw y field
    pub y: [u8; 4],
}

/// A single regiment record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Regiment {
    /// Status bytes; `11 00` observed for regiments in the army,
    /// `10 00` for regiments not yet recruited
    pub status: [u8; 2],
    /// Unit ID
    pub id: u16,
    /// Name of the regiment, e.g. "Grudgebringer Cavalry", "Zombies #1"
    pub name: String,
    /// ID of the name in the executable's string tables
    pub name_id: u16,
    /// Raw alignment byte; decode with [`Regiment::alignment`]
    pub alignment: u8,
    /// Class byte packing the unit type (high 5 bits) and race (low
    /// 3 bits); decode with [`Regiment::unit_type`] and
    /// [`Regiment::race`]
    pub class: u8,
    /// Index into the executable's sprite name table for the banner
    /// sprite (both sizes); resolve it with
    /// [`crate::engrel::read_sprite_name`]
    pub banner_index: u16,
    /// Index into the executable's sprite name table for the troop
    /// sprite
    pub sprite_index: u16,
    /// Maximum number of troops allowed in the regiment
    pub max_troops: u8,
    /// Number of troops currently alive
    pub alive_troops: u8,
    /// Number of ranks the regiment forms up in
    pub ranks: u8,
    /// Regiment attribute bytes
    pub attributes: [u8; 4],
    /// Stat line shared by the regiment's troops
    pub troop_attributes: TroopAttributes,
    /// Mount kind
    pub mount: u8,
    /// Armour kind
    pub armour: u8,
    /// Weapon kind
    pub weapon: u8,
    /// Point value
    pub point_value: u8,
    /// Missile weapon kind
    pub missile_weapon: u8,
    /// The regiment's leader
    pub leader: Leader,
    /// Total experience, 0 to 6000
    pub experience: u16,
    /// Duplicate ID distinguishing same-named regiments
    pub duplicate_id: u8,
    /// Minimum or base armour level, shown as gold shields in the
    /// troop roster
    pub min_armour: u8,
    /// Maximum armour level
    pub max_armour: u8,
    /// Equipped magic book as an index into the magic-item table;
    /// 0 means none, [`MAGIC_ITEM_SLOT_DISABLED`] means the regiment
    /// has no book slot (only magic users can equip books)
    pub magic_book: u16,
    /// Equipped magic items, each an index into the magic-item table;
    /// 0 means the slot is empty, [`MAGIC_ITEM_SLOT_DISABLED`] means
    /// the slot cannot be used
    pub magic_items: [u16; 3],
    /// Recruitment cost
    pub cost: u16,
    /// Wizard type, non-zero only for magic users
    pub wizard_type: u8,
    /// Armour levels purchased beyond the base
    pub purchased_armour: u8,
    /// Highest purchasable armour level
    pub max_purchasable_armour: u8,
    /// Troops re-purchased after losses
    pub repurchased_troops: u8,
    /// Highest purchasable troop count
    pub max_purchasable_troops: u8,
    /// Army-book profile bytes
    pub book_profile: [u8; 4],
    /// Unknown bytes at offset 2, observed as zero
    pub unknown1: [u8; 2],
    /// Unknown bytes at offset 6, observed as zero
    pub unknown2: [u8; 2],
    /// Unknown bytes at offset 14, observed as zero
    pub unknown3: [u8; 2],
    /// Unknown bytes at offset 60
    pub unknown4: [u8; 4],
    /// Unknown byte at offset 79
    pub unknown5: u8,
    /// Unknown bytes at offset 80
    pub unknown6: [u8; 4],
    /// Unknown bytes at offset 142
    pub unknown7: [u8; 4],
}

impl Regiment {
    /// The regiment's type, from the high 5 bits of the class byte
    #[must_use]
    pub fn unit_type(&self) -> UnitType {
        UnitType::from_class_byte(self.class)
    }

    /// The regiment's race, from the low 3 bits of the class byte
    #[must_use]
    pub fn race(&self) -> Race {
        Race::from_class_byte(self.class)
    }

    /// The regiment's alignment, when the byte holds a known value
    #[must_use]
    pub fn alignment(&self) -> Option<Alignment> {
        Alignment::from_byte(self.alignment)
    }

    /// Threat level derived from experience: 1 below 1000, 2 below
    /// 3000, 3 below 6000, 4 at 6000 and above
    #[must_use]
    pub fn threat_level(&self) -> u8 {
        match self.experience {
            0..=999 => 1,
            1000..=2999 => 2,
            3000..=5999 => 3,
            _ => 4,
        }
    }
}

/// Alignment of a regiment to good or evil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Alignment {
    /// Byte value 0
    Good,
    /// Byte value 64
    Neutral,
    /// Byte value 128
    Evil,
}

impl Alignment {
    /// Decodes the raw alignment byte; unknown values yield `None`.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Good),
            64 => Some(Self::Neutral),
            128 => Some(Self::Evil),
            _ => None,
        }
    }
}

/// Regiment type, stored in the high 5 bits of the class byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum UnitType {
    /// No known type
    Unknown,
    /// Infantry
    Infantry,
    /// Cavalry
    Cavalry,
    /// Archers
    Archers,
    /// Artillery
    Artillery,
    /// Magic users
    MagicUsers,
    /// Monsters
    Monsters,
    /// Chariots
    Chariots,
    /// Miscellaneous units such as fleeing villagers
    Misc,
}

impl UnitType {
    /// Decodes the type from a packed class byte.
    #[must_use]
    pub fn from_class_byte(class: u8) -> Self {
        match class >> 3 {
            1 => Self::Infantry,
            2 => Self::Cavalry,
            3 => Self::Archers,
            4 => Self::Artillery,
            5 => Self::MagicUsers,
            6 => Self::Monsters,
            7 => Self::Chariots,
            8 => Self::Misc,
            _ => Self::Unknown,
        }
    }
}

/// Regiment race, stored in the low 3 bits of the class byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Race {
    /// Humans
    Human,
    /// Wood elves
    WoodElf,
    /// Dwarfs
    Dwarf,
    /// Night goblins
    NightGoblin,
    /// Orcs
    Orc,
    /// Undead
    Undead,
    /// Townsfolk
    Townsfolk,
    /// Ogres; the Imperial Steam Tank also sits in this slot
    Ogre,
}

impl Race {
    /// Decodes the race from a packed class byte.
    #[must_use]
    pub fn from_class_byte(class: u8) -> Self {
        match class & 0b111 {
            0 => Self::Human,
            1 => Self::WoodElf,
            2 => Self::Dwarf,
            3 => Self::NightGoblin,
            4 => Self::Orc,
            5 => Self::Undead,
            6 => Self::Townsfolk,
            _ => Self::Ogre,
        }
    }
}

/// Normalizes a `[BOOKS]`-relative banner path to forward slashes.
///
/// Banner paths are stored with a `[BOOKS]` placeholder root and DOS
/// backslash separators, e.g. `[BOOKS]\hshield.spr`.
#[must_use]
pub fn normalize_books_path(path: &str) -> String {
    path.replace("[BOOKS]", "BOOKS").replace('\\', "/")
}
