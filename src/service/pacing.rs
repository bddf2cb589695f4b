use std::time::Duration;

/// Cosmetic delay in front of each game operation.
///
/// The delay is pacing only: it is not a timeout and the operation cannot be
/// cancelled part-way through it. [`Pacing::default`] reproduces the game's
/// original timings; [`Pacing::instant`] removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub initial_clue: Duration,
    pub decode_script: Duration,
    pub search_temple: Duration,
    pub open_treasure_box: Duration,
    pub get_leaderboard: Duration,
    pub save_to_leaderboard: Duration,
    pub get_user: Duration,
    pub register_user: Duration,
    pub login_user: Duration,
    pub update_user: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        // ---
        let ms = Duration::from_millis;
        Self {
            initial_clue: ms(1500),
            decode_script: ms(2000),
            search_temple: ms(2500),
            open_treasure_box: ms(3000),
            get_leaderboard: ms(1000),
            save_to_leaderboard: ms(800),
            get_user: ms(800),
            register_user: ms(1000),
            login_user: ms(1000),
            update_user: ms(800),
        }
    }
}

impl Pacing {
    // ---
    /// No delays at all.
    pub fn instant() -> Self {
        // ---
        Self::default().scaled(0)
    }

    /// Every delay multiplied by `percent / 100`.
    pub fn scaled(self, percent: u32) -> Self {
        // ---
        let scale = |d: Duration| d * percent / 100;
        Self {
            initial_clue: scale(self.initial_clue),
            decode_script: scale(self.decode_script),
            search_temple: scale(self.search_temple),
            open_treasure_box: scale(self.open_treasure_box),
            get_leaderboard: scale(self.get_leaderboard),
            save_to_leaderboard: scale(self.save_to_leaderboard),
            get_user: scale(self.get_user),
            register_user: scale(self.register_user),
            login_user: scale(self.login_user),
            update_user: scale(self.update_user),
        }
    }
}
