use std::cmp::Ordering;

#[derive(Clone, Copy)]
pub(crate) struct RankedScore {
    pub index: usize,
    pub score: f32,
}

/// Sorts label indexes by descending score.
/// Equal scores keep ascending label index order and NaN scores go last.
pub(crate) fn rank_scores(scores: &[f32]) -> Vec<RankedScore> {
    let mut ranked = scores
        .iter()
        .enumerate()
        .map(|(index, score)| RankedScore {
            index,
            score: *score,
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| compare_desc(a.score, b.score).then(a.index.cmp(&b.index)));
    ranked
}

fn compare_desc(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
