mod score_ranking;
mod score_window;
pub(crate) use score_ranking::rank_scores;
pub(crate) use score_window::ScoreWindow;
