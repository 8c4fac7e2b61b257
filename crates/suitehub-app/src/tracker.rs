//! Request tickets guarding state slices against out-of-order responses
//!
//! Each writable resource carries a generation counter. Dispatching a
//! procedure issues a fresh ticket for every resource it will write; when the
//! procedure completes, each part of its result is applied only if the ticket
//! for that resource is still the latest one. Older responses are dropped.

use serde::Serialize;

/// A state slice that procedures write as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Overview,
    Catalog,
    SuiteList,
    /// Active suite id, detail and runs
    ActiveSuite,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Overview,
        Resource::Catalog,
        Resource::SuiteList,
        Resource::ActiveSuite,
    ];

    fn index(self) -> usize {
        match self {
            Resource::Overview => 0,
            Resource::Catalog => 1,
            Resource::SuiteList => 2,
            Resource::ActiveSuite => 3,
        }
    }
}

/// A request's claim on a resource at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub resource: Resource,
    pub generation: u64,
}

/// Generation counters for every resource
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    generations: [u64; 4],
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `resource`, superseding every earlier ticket for it
    pub fn issue(&mut self, resource: Resource) -> Ticket {
        let slot = &mut self.generations[resource.index()];
        *slot += 1;
        Ticket {
            resource,
            generation: *slot,
        }
    }

    /// Ticket for the current generation without superseding anything
    pub fn observe(&self, resource: Resource) -> Ticket {
        Ticket {
            resource,
            generation: self.generations[resource.index()],
        }
    }

    /// Whether no newer ticket was issued for the ticket's resource
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generations[ticket.resource.index()] == ticket.generation
    }

    pub fn generation(&self, resource: Resource) -> u64 {
        self.generations[resource.index()]
    }
}

/// The tickets one procedure holds, at most one per resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketSet {
    tickets: [Option<Ticket>; 4],
}

impl TicketSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ticket: Ticket) -> Self {
        self.tickets[ticket.resource.index()] = Some(ticket);
        self
    }

    pub fn get(&self, resource: Resource) -> Option<Ticket> {
        self.tickets[resource.index()]
    }

    /// Whether this set holds a ticket for `resource` that is still current
    pub fn is_current(&self, resource: Resource, tracker: &RequestTracker) -> bool {
        self.get(resource).is_some_and(|t| tracker.is_current(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = Ticket> + '_ {
        self.tickets.iter().flatten().copied()
    }
}
