use crate::lang::{ast::Statement, LineNumber};
use std::collections::{btree_map::Iter, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};

/// ## Program source
///
/// Statements keyed and ordered by line number.

#[derive(Debug, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Statement>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns the statement that was replaced, if any.
    pub fn insert(&mut self, number: LineNumber, statement: Statement) -> Option<Statement> {
        self.source.insert(number, statement)
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<Statement> {
        self.source.remove(&number)
    }

    pub fn get(&self, number: LineNumber) -> Option<&Statement> {
        self.source.get(&number)
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.source.contains_key(&number)
    }

    pub fn first_line_number(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    pub fn next_line_number(&self, after: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(after), Unbounded))
            .next()
            .map(|(number, _)| *number)
    }

    pub fn lines(&self) -> Iter<'_, LineNumber, Statement> {
        self.source.iter()
    }
}
