use crate::app::settings::MAX_FAVORITES;

/// Zero-based favorite index for the keys `1` to `9`.
pub(super) fn favorite_slot(key: char) -> Option<usize> {
    let slot = usize::try_from(key.to_digit(10)?).ok()?;
    (1..=MAX_FAVORITES).contains(&slot).then(|| slot - 1)
}
