#![allow(dead_code)]

use async_trait::async_trait;
use recordboard_application::ports::{DisplaySurface, EventSource};
use recordboard_domain::{DnsRecord, DomainError, InboundEvent, TableRow};
use std::collections::VecDeque;

// ============================================================================
// Mock DisplaySurface
// ============================================================================

#[derive(Default)]
pub struct MockSurface {
    rows: Vec<TableRow>,
    published: Vec<Vec<TableRow>>,
    clear_count: u64,
    fail_on_flush: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_on_flush: true,
            ..Self::default()
        }
    }

    /// Pre-populates the surface as if an earlier render had happened.
    pub fn with_rows(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Every table published by `flush`, oldest first.
    pub fn published(&self) -> &[Vec<TableRow>] {
        &self.published
    }

    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }
}

impl DisplaySurface for MockSurface {
    fn clear(&mut self) {
        self.clear_count += 1;
        self.rows.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        if self.fail_on_flush {
            return Err(DomainError::Surface("mock flush failure".to_string()));
        }
        self.published.push(self.rows.clone());
        Ok(())
    }
}

// ============================================================================
// Scripted EventSource
// ============================================================================

pub struct ScriptedEventSource {
    script: VecDeque<Result<InboundEvent, DomainError>>,
    polls: u64,
}

impl ScriptedEventSource {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            polls: 0,
        }
    }

    pub fn event(mut self, event: InboundEvent) -> Self {
        self.script.push_back(Ok(event));
        self
    }

    pub fn records(self, records: &[DnsRecord]) -> Self {
        self.event(InboundEvent::dns_records(records))
    }

    pub fn error(mut self, error: DomainError) -> Self {
        self.script.push_back(Err(error));
        self
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

#[async_trait]
impl EventSource for ScriptedEventSource {
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError> {
        self.polls += 1;
        match self.script.pop_front() {
            Some(Ok(event)) => Ok(Some(event)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

/// Never yields; only shutdown can end a subscription on this source.
pub struct PendingEventSource;

#[async_trait]
impl EventSource for PendingEventSource {
    async fn next_event(&mut self) -> Result<Option<InboundEvent>, DomainError> {
        std::future::pending().await
    }
}

pub fn example_record() -> DnsRecord {
    DnsRecord::new("example.com", "A 93.184.216.34", 300)
}
