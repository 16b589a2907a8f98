use crate::collector::Example;

/// Neighbours of one catalog entry, by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Links {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// The ordered examples of one run. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    examples: Vec<Example>,
    links: Vec<Links>,
}

/// An example together with its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub position: usize,
    pub example: &'a Example,
    pub previous: Option<&'a Example>,
    pub next: Option<&'a Example>,
}

impl Catalog {
    pub fn new(examples: Vec<Example>) -> Self {
        let count = examples.len();
        let links = (0..count)
            .map(|i| Links {
                previous: i.checked_sub(1),
                next: (i + 1 < count).then_some(i + 1),
            })
            .collect();
        Catalog { examples, links }
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn get(&self, position: usize) -> Option<&Example> {
        self.examples.get(position)
    }

    pub fn links(&self, position: usize) -> Option<Links> {
        self.links.get(position).copied()
    }

    pub fn previous(&self, position: usize) -> Option<&Example> {
        self.links(position)?.previous.and_then(|i| self.get(i))
    }

    pub fn next(&self, position: usize) -> Option<&Example> {
        self.links(position)?.next.and_then(|i| self.get(i))
    }

    pub fn entry(&self, position: usize) -> Option<Entry<'_>> {
        Some(Entry {
            position,
            example: self.get(position)?,
            previous: self.previous(position),
            next: self.next(position),
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        (0..self.len()).filter_map(|i| self.entry(i))
    }
}
