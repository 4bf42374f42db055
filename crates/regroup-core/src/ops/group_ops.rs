use super::array_ops::{delete, insert, replace};
use crate::errors::Result;
use crate::model::{Location, Structure};

/// Convert an insertion position to the signed index `insert` expects
///
/// Positions beyond `isize::MAX` saturate, which `insert` treats as append.
fn insertion_index(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Remove the item at `location` from its group
///
/// The group stays in place even when this leaves it empty.
///
/// # Errors
/// * `InvalidLocation` - If the group does not exist
/// * `ItemOutOfRange` - If the group has no item at `location.item_index`
pub fn delete_item<T: Clone>(structure: &Structure<T>, location: Location) -> Result<Structure<T>> {
    structure.item_checked(location)?;
    let group = structure.group_checked(location.group_index)?;

    let groups = replace(
        structure.groups(),
        location.group_index,
        delete(group, location.item_index),
    );

    Ok(Structure::from_groups(groups))
}

/// Append a new empty group
pub fn add_group<T: Clone>(structure: &Structure<T>) -> Structure<T> {
    let groups = insert(
        structure.groups(),
        insertion_index(structure.group_count()),
        Vec::new(),
    );
    Structure::from_groups(groups)
}

/// Append a new group holding only `item`
///
/// This is the only way items enter a Structure; there is no operation for
/// adding to an existing group.
pub fn add_item<T: Clone>(structure: &Structure<T>, item: T) -> Structure<T> {
    let groups = insert(
        structure.groups(),
        insertion_index(structure.group_count()),
        vec![item],
    );
    Structure::from_groups(groups)
}

/// Move the item at `origin` to `destination`
///
/// `destination.item_index` is an insertion position and clamps like
/// `insert`. For a move within one group it is read against the group
/// after the item has been taken out.
///
/// Cases, in order:
/// 1. Same group and that group is already empty: structure unchanged.
/// 2. Same group: take the item out, reinsert it, replace the one group.
/// 3. Different groups: take the item out of the origin group, insert it
///    into the destination group as it was before the move, replace both.
///
/// Item count and group count are the same before and after.
///
/// # Errors
/// * `InvalidLocation` - If either group index does not exist
/// * `ItemOutOfRange` - If the origin group has no item at `origin.item_index`
pub fn move_item<T: Clone>(
    structure: &Structure<T>,
    origin: Location,
    destination: Location,
) -> Result<Structure<T>> {
    let origin_group = structure.group_checked(origin.group_index)?;
    let destination_group = structure.group_checked(destination.group_index)?;

    // An empty group cannot hold the item being moved; keep this a no-op.
    if origin.group_index == destination.group_index && origin_group.is_empty() {
        return Ok(structure.clone());
    }

    let moved = structure.item_checked(origin)?.clone();
    let without_item = delete(origin_group, origin.item_index);
    let target = insertion_index(destination.item_index);

    let groups = if origin.group_index == destination.group_index {
        replace(
            structure.groups(),
            origin.group_index,
            insert(&without_item, target, moved),
        )
    } else {
        let origin_updated = replace(structure.groups(), origin.group_index, without_item);
        replace(
            &origin_updated,
            destination.group_index,
            insert(destination_group, target, moved),
        )
    };

    Ok(Structure::from_groups(groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegroupError;

    fn structure(groups: &[&[char]]) -> Structure<char> {
        groups.iter().map(|g| g.to_vec()).collect()
    }

    #[test]
    fn test_delete_item_keeps_emptied_group() {
        let s = structure(&[&['A'], &['B']]);
        let next = delete_item(&s, Location::new(0, 0)).unwrap();
        assert_eq!(next, structure(&[&[], &['B']]));
    }

    #[test]
    fn test_move_within_group_reorders() {
        let s = structure(&[&['A', 'B', 'C'], &['D']]);
        let next = move_item(&s, Location::new(0, 0), Location::new(0, 2)).unwrap();
        assert_eq!(next, structure(&[&['B', 'C', 'A'], &['D']]));
    }

    #[test]
    fn test_move_same_group_empty_is_noop() {
        let s = structure(&[&[], &['A']]);
        let next = move_item(&s, Location::new(0, 0), Location::new(0, 0)).unwrap();
        assert_eq!(next, s);
    }

    #[test]
    fn test_move_rejects_missing_destination_group() {
        let s = structure(&[&['A']]);
        let result = move_item(&s, Location::new(0, 0), Location::new(1, 0));
        assert!(matches!(
            result,
            Err(RegroupError::InvalidLocation { group_index: 1, .. })
        ));
    }
}
