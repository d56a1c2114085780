//! Page requests and pages of results.

use std::str::FromStr;

use blog_shared::{PageQuery, PageResponse};

use super::post::PostField;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::Validation(format!(
                "Invalid sort direction '{}'",
                s
            ))),
        }
    }
}

/// Ordering of a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: PostField,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: PostField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: PostField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

impl FromStr for Sort {
    type Err = DomainError;

    /// Parses `property` or `property,direction`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let field = parts.next().unwrap_or_default().parse()?;
        let direction = match parts.next() {
            Some(d) if !d.is_empty() => d.parse()?,
            _ => Direction::Asc,
        };
        if parts.next().is_some() {
            return Err(DomainError::Validation(format!("Invalid sort '{}'", s)));
        }
        Ok(Self { field, direction })
    }
}

/// A bounded slice of a larger result set: zero-based index, size, ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Option<Sort>,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u64 = 20;
    pub const MAX_SIZE: u64 = 2000;

    /// Sizes below 1 fall back to the default, sizes above the maximum are clamped.
    pub fn new(page: u64, size: u64) -> Self {
        let size = match size {
            0 => Self::DEFAULT_SIZE,
            s => s.min(Self::MAX_SIZE),
        };
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = DomainError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let request = Self::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(Self::DEFAULT_SIZE),
        );
        // Stores address rows with signed 64-bit offsets.
        let in_range = request
            .page
            .checked_mul(request.size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(DomainError::Validation(format!(
                "Page index {} is out of range",
                request.page
            )));
        }
        match query.sort.as_deref().map(str::trim) {
            Some(sort) if !sort.is_empty() => Ok(request.with_sort(sort.parse()?)),
            _ => Ok(request),
        }
    }
}

/// One page of results plus the information needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        }
    }

    pub fn into_response(self) -> PageResponse<T> {
        let total_pages = self.total_pages();
        let number_of_elements = self.content.len() as u64;
        PageResponse {
            empty: self.content.is_empty(),
            content: self.content,
            total_elements: self.total_elements,
            total_pages,
            number: self.page,
            size: self.size,
            number_of_elements,
            first: self.page == 0,
            last: self.page.saturating_add(1) >= total_pages,
        }
    }
}
