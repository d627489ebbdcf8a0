use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// Pagination query parameters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num: Some(page_num),
            page_size: Some(page_size),
        }
    }

    pub fn page_num(&self) -> u32 {
        self.page_num.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        (self.page_num() as u64 - 1) * self.page_size() as u64
    }
}

/// One page of query results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    pub page_num: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub item_count: u64,
    pub items: Vec<T>,
}

impl<T> PageData<T> {
    pub fn new(items: Vec<T>, item_count: u64, page_num: u32, page_size: u32) -> Self {
        let page_count = item_count.div_ceil(page_size.max(1) as u64) as u32;
        Self {
            page_num,
            page_count,
            page_size,
            item_count,
            items,
        }
    }

    /// The page returned when the caller can see nothing at all.
    pub fn empty(page_size: u32) -> Self {
        Self {
            page_num: 1,
            page_count: 0,
            page_size,
            item_count: 0,
            items: Vec::new(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageData<U> {
        PageData {
            page_num: self.page_num,
            page_count: self.page_count,
            page_size: self.page_size,
            item_count: self.item_count,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults_and_clamps() {
        let q = PageQuery::default();
        assert_eq!(q.page_num(), 1);
        assert_eq!(q.page_size(), 20);
        assert_eq!(q.offset(), 0);

        let q = PageQuery::new(0, 500);
        assert_eq!(q.page_num(), 1);
        assert_eq!(q.page_size(), 100);

        let q = PageQuery::new(3, 10);
        assert_eq!(q.offset(), 20);
    }

    #[test]
    fn page_count_rounds_up() {
        let page = PageData::new(vec![1, 2, 3], 21, 1, 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(PageData::<i32>::new(vec![], 0, 1, 10).page_count, 0);
    }

    #[test]
    fn empty_page_shape() {
        let page = PageData::<String>::empty(15);
        assert_eq!(page.page_num, 1);
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page_size, 15);
        assert_eq!(page.item_count, 0);
        assert!(page.items.is_empty());
    }
}
