//! The paging contract shared by both trigger strategies.
//!
//! Loading is split in two halves. [`PageRequester`] is the synchronous
//! "initiate" call made on the UI thread once a trigger has been accepted; it
//! returns nothing. [`PageSource`] is the asynchronous data source the
//! requester eventually calls. Whatever the fetch does, its owner must settle
//! the list (see [`PagedList::settle`](crate::list::PagedList::settle)) so
//! the loading flag clears, including on failure.

use crate::errors::PagingError;
use crate::model::{FetchRequest, Page, PageRequest};
use async_trait::async_trait;

/// Initiates the next page fetch.
///
/// Callers only invoke this after the list flipped to `Loading`; implementors
/// never have to guard against duplicates themselves.
pub trait PageRequester {
    fn request_next_page(&mut self, request: FetchRequest);
}

impl<F> PageRequester for F
where
    F: FnMut(FetchRequest),
{
    fn request_next_page(&mut self, request: FetchRequest) {
        self(request)
    }
}

/// Asynchronous source of pages.
#[async_trait]
pub trait PageSource: Send + Sync + 'static {
    type Item: Send + 'static;

    async fn fetch_page(&self, request: PageRequest) -> Result<Page<Self::Item>, PagingError>;
}
