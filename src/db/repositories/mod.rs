pub mod film;
pub mod people;
pub mod planet;
pub mod user;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::domain::{CatalogError, EntityKind};

/// Collects relationship ids in ascending order, which is insertion order.
pub(crate) fn sorted_ids(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Fails with a validation error naming every id in `ids` that has no row in `E`.
pub(crate) async fn ensure_exist<E, C>(
    db: &C,
    id_column: E::Column,
    kind: EntityKind,
    ids: &[i32],
) -> Result<(), CatalogError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let wanted = sorted_ids(ids.iter().copied());
    if wanted.is_empty() {
        return Ok(());
    }

    let found: Vec<i32> = E::find()
        .select_only()
        .column(id_column)
        .filter(id_column.is_in(wanted.clone()))
        .into_tuple()
        .all(db)
        .await?;

    let missing: Vec<String> = wanted
        .iter()
        .filter(|id| !found.contains(id))
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Validation(format!(
            "{kind} {} does not exist",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ids() {
        assert_eq!(sorted_ids([3, 1, 2, 3]), vec![1, 2, 3]);
        assert!(sorted_ids(Vec::new()).is_empty());
    }
}
