use serde::{Deserialize, Serialize};

pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_COURSE_PAGE_SIZE: u32 = 10;
pub const DEFAULT_FILE_PAGE_SIZE: u32 = 20;

/// One-based page coordinates, already normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Page 0 becomes 1, size 0 becomes `default_size`, and sizes are capped at
    /// [`MAX_PAGE_SIZE`].
    pub fn normalize(page: u32, size: u32, default_size: u32) -> Self {
        let page = page.max(1);
        let size = if size == 0 { default_size } else { size };
        Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
        }
    }

    pub fn for_courses(page: u32, size: u32) -> Self {
        Self::normalize(page, size, DEFAULT_COURSE_PAGE_SIZE)
    }

    pub fn for_files(page: u32, size: u32) -> Self {
        Self::normalize(page, size, DEFAULT_FILE_PAGE_SIZE)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }

    /// Slices an already sorted in-memory collection.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items
            .iter()
            .skip(offset)
            .take(self.size as usize)
            .cloned()
            .collect()
    }
}

/// A page of results with the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.size(),
        }
    }

    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn zeroes_fall_back_to_defaults() {
        let courses = PageRequest::for_courses(0, 0);
        assert_eq!((courses.page(), courses.size()), (1, 10));

        let files = PageRequest::for_files(0, 0);
        assert_eq!((files.page(), files.size()), (1, 20));
    }

    #[test]
    fn oversized_pages_are_clamped() {
        assert_eq!(PageRequest::for_files(2, 1000).size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn slice_skips_earlier_pages() {
        let items: Vec<u32> = (0..25).collect();
        let page = PageRequest::normalize(3, 10, 10);
        assert_eq!(page.slice(&items), vec![20, 21, 22, 23, 24]);
        assert!(PageRequest::normalize(4, 10, 10).slice(&items).is_empty());
    }

    #[test]
    fn has_more_compares_against_total() {
        let request = PageRequest::normalize(1, 10, 10);
        assert!(Page::new(vec![1; 10], 11, request).has_more());
        assert!(!Page::new(vec![1; 10], 10, request).has_more());
    }

    #[quickcheck]
    fn normalized_sizes_stay_in_range(page: u32, size: u32) -> bool {
        let request = PageRequest::for_courses(page, size);
        request.page() >= 1 && (1..=MAX_PAGE_SIZE).contains(&request.size())
    }
}
