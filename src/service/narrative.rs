//! The hunt's story: clue, decoding, temple search, treasure.
//!
//! These steps keep no state between calls. Sequencing them is up to the
//! caller; only the temple search checks its input.

use super::GameService;
use crate::domain::GameError;
use rand::Rng;

const INITIAL_CLUE: &str = "You found an ancient parchment covered in mysterious symbols: \
     \"𐌵𐌿𐌳𐌰𐌽𐌰 𐌽𐌰𐍃𐍄𐍉𐍂 𐌲𐌿𐍄𐍉𐍂 𐌳𐌰𐌽 𐍅𐌰𐌸𐌾𐍉𐍃\"";

const DECODED_SCRIPT: &str = "You decoded the script: \"The mysterious temple is hidden in a \
     cave to the east.\" The temple must be your next destination.";

const TEMPLE_FOUND: &str = "At the heart of the temple you discover a mysterious treasure \
     chest. It seems to have been carried into a hidden cave!";

/// Word a clue must contain before the temple can be searched.
pub const TEMPLE_KEYWORD: &str = "temple";

/// Possible contents of the treasure box.
pub const TREASURE_REWARDS: [&str; 3] = [
    "Congratulations! You found the legendary \"Stone of Wisdom\"!",
    "Amazing! You obtained the \"Eternal Treasure\"!",
    "Incredible! You solved a thousand-year-old riddle and gained boundless knowledge and wealth!",
];

/// Appended to every reward.
pub const HUNT_COMPLETE_SUFFIX: &str = " You have completed this treasure hunt!";

impl GameService {
    // ---

    /// The parchment that starts every hunt.
    #[tracing::instrument(skip(self))]
    pub async fn get_initial_clue(&self) -> &'static str {
        // ---
        self.paced("get_initial_clue", self.pacing.initial_clue, async {
            INITIAL_CLUE
        })
        .await
    }

    /// Translates the parchment. Any input decodes to the same text.
    #[tracing::instrument(skip(self, _ancient_text))]
    pub async fn decode_ancient_script(&self, _ancient_text: &str) -> &'static str {
        // ---
        self.paced("decode_ancient_script", self.pacing.decode_script, async {
            DECODED_SCRIPT
        })
        .await
    }

    /// Searches the temple the clue points to.
    ///
    /// # Errors
    /// [`GameError::ClueNotUnderstood`] unless `clue` contains
    /// [`TEMPLE_KEYWORD`].
    #[tracing::instrument(skip(self, clue))]
    pub async fn search_temple(&self, clue: &str) -> Result<&'static str, GameError> {
        // ---
        self.paced("search_temple", self.pacing.search_temple, async {
            if clue.contains(TEMPLE_KEYWORD) {
                Ok(TEMPLE_FOUND)
            } else {
                tracing::warn!("Temple searched without an understood clue");
                Err(GameError::ClueNotUnderstood)
            }
        })
        .await
    }

    /// Opens the chest: one of [`TREASURE_REWARDS`], picked uniformly, followed
    /// by [`HUNT_COMPLETE_SUFFIX`].
    #[tracing::instrument(skip(self))]
    pub async fn open_treasure_box(&self) -> String {
        // ---
        self.paced("open_treasure_box", self.pacing.open_treasure_box, async {
            let reward = pick_reward();
            format!("{reward}{HUNT_COMPLETE_SUFFIX}")
        })
        .await
    }
}

fn pick_reward() -> &'static str {
    // ---
    let index = rand::thread_rng().gen_range(0..TREASURE_REWARDS.len());
    TREASURE_REWARDS[index]
}
