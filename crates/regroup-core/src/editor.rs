//! Sink-delivering editor
//!
//! A `GroupEditor` pairs the caller's current `Structure` with a sink that
//! replaces it. Each edit computes the next Structure through `apply()` and
//! hands it to the sink synchronously, exactly once. On error the sink is
//! not called.
//!
//! ```
//! use regroup_core::{GroupEditor, Location, Structure};
//!
//! let mut groups = Structure::from(vec![vec!["a", "b"], vec![]]);
//! let current = groups.clone();
//!
//! let mut editor = GroupEditor::new(&current, |next: Structure<&'static str>| groups = next);
//! editor.move_item(Location::new(0, 0), Location::new(1, 0)).unwrap();
//! drop(editor);
//!
//! assert_eq!(groups.groups(), &[vec!["b"], vec!["a"]]);
//! ```

use crate::apply::apply;
use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Location, Structure};

/// Receives each newly computed Structure
pub trait StructureSink<T> {
    fn replace(&mut self, next: Structure<T>);
}

impl<T, F> StructureSink<T> for F
where
    F: FnMut(Structure<T>),
{
    fn replace(&mut self, next: Structure<T>) {
        self(next)
    }
}

/// Sink that records every delivered Structure in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    versions: Vec<Structure<T>>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            versions: Vec::new(),
        }
    }

    pub fn latest(&self) -> Option<&Structure<T>> {
        self.versions.last()
    }

    pub fn versions(&self) -> &[Structure<T>] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StructureSink<T> for History<T> {
    fn replace(&mut self, next: Structure<T>) {
        self.versions.push(next);
    }
}

/// Edit operations bound to one Structure version and a sink
///
/// Locations passed in are resolved against `current`. After the sink
/// fires, `current` is stale; build a new editor over the new version
/// before issuing further edits.
pub struct GroupEditor<'a, T, S> {
    current: &'a Structure<T>,
    sink: S,
}

impl<'a, T, S> GroupEditor<'a, T, S>
where
    T: Clone,
    S: StructureSink<T>,
{
    pub fn new(current: &'a Structure<T>, sink: S) -> Self {
        Self { current, sink }
    }

    /// The Structure this editor resolves locations against
    pub fn groups(&self) -> &'a Structure<T> {
        self.current
    }

    /// Total items across all groups of the current Structure
    pub fn item_count(&self) -> usize {
        self.current.item_count()
    }

    /// Remove the item at `location`, keeping its group
    ///
    /// # Errors
    /// * `InvalidLocation` / `ItemOutOfRange` - If `location` addresses no item
    pub fn delete_item(&mut self, location: Location) -> Result<()> {
        self.dispatch(Command::DeleteItem { location })
    }

    /// Append an empty group
    ///
    /// # Errors
    /// Never fails for a well-formed Structure; the `Result` mirrors the
    /// other edits.
    pub fn add_group(&mut self) -> Result<()> {
        self.dispatch(Command::AddGroup)
    }

    /// Append a singleton group holding `item`
    ///
    /// # Errors
    /// Never fails for a well-formed Structure; the `Result` mirrors the
    /// other edits.
    pub fn add_item(&mut self, item: T) -> Result<()> {
        self.dispatch(Command::AddItem { item })
    }

    /// Move the item at `origin` to `destination`
    ///
    /// # Errors
    /// * `InvalidLocation` - If either group does not exist
    /// * `ItemOutOfRange` - If the origin group has no item at `origin.item_index`
    pub fn move_item(&mut self, origin: Location, destination: Location) -> Result<()> {
        self.dispatch(Command::MoveItem {
            origin,
            destination,
        })
    }

    /// Consume the editor and give back its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn dispatch(&mut self, cmd: Command<T>) -> Result<()> {
        let next = apply(self.current, cmd)?;
        self.sink.replace(next);
        Ok(())
    }
}
