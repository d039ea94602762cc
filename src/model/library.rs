//! Built-in exercise catalogue.

use crate::model::BodyPart;

/// A catalogue entry: an exercise name and the body part it targets.
///
/// Some movements appear under more than one body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Exercise name.
    pub name: &'static str,
    /// Body part this listing belongs to.
    pub body_part: BodyPart,
}

/// Filter applied when browsing the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    /// Every entry.
    #[default]
    All,
    /// Entries for one body part.
    Part(BodyPart),
}

impl LibraryFilter {
    /// Chip label.
    pub fn label(self) -> &'static str {
        match self {
            LibraryFilter::All => "All",
            LibraryFilter::Part(part) => part.label(),
        }
    }

    /// Next filter: All, then each body part, wrapping back to All.
    pub fn next(self) -> Self {
        match self {
            LibraryFilter::All => LibraryFilter::Part(BodyPart::ALL[0]),
            LibraryFilter::Part(BodyPart::FullBody) => LibraryFilter::All,
            LibraryFilter::Part(part) => LibraryFilter::Part(part.next()),
        }
    }

    /// Previous filter.
    pub fn prev(self) -> Self {
        match self {
            LibraryFilter::All => LibraryFilter::Part(BodyPart::FullBody),
            LibraryFilter::Part(BodyPart::Chest) => LibraryFilter::All,
            LibraryFilter::Part(part) => LibraryFilter::Part(part.prev()),
        }
    }

    fn matches(self, entry: &LibraryEntry) -> bool {
        match self {
            LibraryFilter::All => true,
            LibraryFilter::Part(part) => entry.body_part == part,
        }
    }
}

const fn entry(name: &'static str, body_part: BodyPart) -> LibraryEntry {
    LibraryEntry { name, body_part }
}

/// The full catalogue, grouped by body part.
pub static LIBRARY: &[LibraryEntry] = &[
    entry("Barbell Bench Press", BodyPart::Chest),
    entry("Incline DB Press", BodyPart::Chest),
    entry("Push-Up", BodyPart::Chest),
    entry("Decline Bench Press", BodyPart::Chest),
    entry("Incline Bench Press", BodyPart::Chest),
    entry("Chest Dips", BodyPart::Chest),
    entry("Cable Fly", BodyPart::Chest),
    entry("Pec Deck", BodyPart::Chest),
    entry("Wide Push-ups", BodyPart::Chest),
    entry("Dumbbell Fly", BodyPart::Chest),
    entry("Incline Push-ups", BodyPart::Chest),
    entry("Decline Push-ups", BodyPart::Chest),
    entry("Close Grip Push-ups", BodyPart::Chest),
    entry("Diamond Push-ups", BodyPart::Chest),
    entry("Archer Push-ups", BodyPart::Chest),
    entry("Pull-Up", BodyPart::Back),
    entry("Deadlift", BodyPart::Back),
    entry("Bent-Over Row", BodyPart::Back),
    entry("Chin-ups", BodyPart::Back),
    entry("Lat Pull-Down", BodyPart::Back),
    entry("Seated Cable Row", BodyPart::Back),
    entry("T-Bar Row", BodyPart::Back),
    entry("Dumbbell Row", BodyPart::Back),
    entry("Hyperextensions", BodyPart::Back),
    entry("Face Pull", BodyPart::Back),
    entry("Inverted Row", BodyPart::Back),
    entry("Good Morning", BodyPart::Back),
    entry("Reverse Grip Barbell Row", BodyPart::Back),
    entry("Cable Pullover", BodyPart::Back),
    entry("Machine Row", BodyPart::Back),
    entry("Single-Arm Lat Pulldown", BodyPart::Back),
    entry("Pendlay Row", BodyPart::Back),
    entry("Landmine Row", BodyPart::Back),
    entry("Kettlebell Swing", BodyPart::Back),
    entry("Superman Hold", BodyPart::Back),
    entry("Back Squat", BodyPart::Legs),
    entry("Leg Press", BodyPart::Legs),
    entry("Lunge", BodyPart::Legs),
    entry("Front Squat", BodyPart::Legs),
    entry("Bulgarian Split Squat", BodyPart::Legs),
    entry("Romanian Deadlift", BodyPart::Legs),
    entry("Hack Squat", BodyPart::Legs),
    entry("Goblet Squat", BodyPart::Legs),
    entry("Glute Bridge", BodyPart::Legs),
    entry("Hip Thrust", BodyPart::Legs),
    entry("Leg Curl", BodyPart::Legs),
    entry("Leg Extension", BodyPart::Legs),
    entry("Calf Raise", BodyPart::Legs),
    entry("Step-Up", BodyPart::Legs),
    entry("Sumo Deadlift", BodyPart::Legs),
    entry("Single-Leg Deadlift", BodyPart::Legs),
    entry("Pistol Squat", BodyPart::Legs),
    entry("Box Squat", BodyPart::Legs),
    entry("Overhead Press", BodyPart::Shoulders),
    entry("Lateral Raise", BodyPart::Shoulders),
    entry("Front Raise", BodyPart::Shoulders),
    entry("Rear Delt Fly", BodyPart::Shoulders),
    entry("Arnold Press", BodyPart::Shoulders),
    entry("Push Press", BodyPart::Shoulders),
    entry("Seated Dumbbell Press", BodyPart::Shoulders),
    entry("Barbell Shoulder Press", BodyPart::Shoulders),
    entry("Cable Lateral Raise", BodyPart::Shoulders),
    entry("Machine Shoulder Press", BodyPart::Shoulders),
    entry("Face Pull (for rear delt)", BodyPart::Shoulders),
    entry("Dumbbell Shrug", BodyPart::Shoulders),
    entry("Kettlebell Press", BodyPart::Shoulders),
    entry("Landmine Press", BodyPart::Shoulders),
    entry("Handstand Push-Up", BodyPart::Shoulders),
    entry("Bicep Curl", BodyPart::Arms),
    entry("Tricep Pushdown", BodyPart::Arms),
    entry("Hammer Curl", BodyPart::Arms),
    entry("Concentration Curl", BodyPart::Arms),
    entry("Preacher Curl", BodyPart::Arms),
    entry("Cable Curl", BodyPart::Arms),
    entry("Incline Dumbbell Curl", BodyPart::Arms),
    entry("Skull Crushers", BodyPart::Arms),
    entry("Overhead Tricep Extension", BodyPart::Arms),
    entry("Close-Grip Bench Press", BodyPart::Arms),
    entry("Dips", BodyPart::Arms),
    entry("Reverse Curl", BodyPart::Arms),
    entry("Zottman Curl", BodyPart::Arms),
    entry("Tricep Kickback", BodyPart::Arms),
    entry("Rope Overhead Extension", BodyPart::Arms),
    entry("Plank", BodyPart::Core),
    entry("Hanging Leg Raise", BodyPart::Core),
    entry("Crunches", BodyPart::Core),
    entry("Bicycle Crunch", BodyPart::Core),
    entry("Russian Twist", BodyPart::Core),
    entry("Mountain Climbers", BodyPart::Core),
    entry("Cable Woodchopper", BodyPart::Core),
    entry("Side Plank", BodyPart::Core),
    entry("Flutter Kicks", BodyPart::Core),
    entry("V-Ups", BodyPart::Core),
    entry("Sit-Ups", BodyPart::Core),
    entry("Toe Touches", BodyPart::Core),
    entry("Ab Rollout", BodyPart::Core),
    entry("Hollow Body Hold", BodyPart::Core),
    entry("Dead Bug", BodyPart::Core),
    entry("Hip Thrust", BodyPart::Glutes),
    entry("Glute Bridge", BodyPart::Glutes),
    entry("Bulgarian Split Squat", BodyPart::Glutes),
    entry("Romanian Deadlift", BodyPart::Glutes),
    entry("Cable Kickback", BodyPart::Glutes),
    entry("Sumo Deadlift", BodyPart::Glutes),
    entry("Step-Up", BodyPart::Glutes),
    entry("Kettlebell Swing", BodyPart::Glutes),
    entry("Fire Hydrant", BodyPart::Glutes),
    entry("Donkey Kicks", BodyPart::Glutes),
    entry("Frog Pump", BodyPart::Glutes),
    entry("Reverse Lunge", BodyPart::Glutes),
    entry("Single-Leg Glute Bridge", BodyPart::Glutes),
    entry("Cable Pull-Through", BodyPart::Glutes),
    entry("Curtsy Lunge", BodyPart::Glutes),
    entry("Kettlebell Swing", BodyPart::FullBody),
    entry("Clean and Press", BodyPart::FullBody),
    entry("Snatch", BodyPart::FullBody),
    entry("Burpees", BodyPart::FullBody),
    entry("Thruster", BodyPart::FullBody),
    entry("Turkish Get-Up", BodyPart::FullBody),
    entry("Deadlift to Press", BodyPart::FullBody),
    entry("Bear Crawl", BodyPart::FullBody),
    entry("Battle Ropes", BodyPart::FullBody),
    entry("Medicine Ball Slam", BodyPart::FullBody),
    entry("Sled Push", BodyPart::FullBody),
    entry("Farmer’s Walk", BodyPart::FullBody),
    entry("Man Maker", BodyPart::FullBody),
    entry("Mountain Climber to Push-Up", BodyPart::FullBody),
    entry("Squat Clean", BodyPart::FullBody),
];

/// Catalogue entries matching `filter`, in catalogue order.
pub fn for_filter(filter: LibraryFilter) -> Vec<LibraryEntry> {
    LIBRARY.iter().copied().filter(|e| filter.matches(e)).collect()
}

/// Catalogue entries for one body part.
pub fn for_body_part(part: BodyPart) -> Vec<LibraryEntry> {
    for_filter(LibraryFilter::Part(part))
}
