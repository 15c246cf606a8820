//! Cursor pagination over `orders.list`

use futures::{Stream, TryStreamExt, stream};
use shared::orders::{ListOrdersQuery, Order, OrdersListResponse};

use super::OrdersApi;
use crate::{ClientError, ClientResult};

/// Lazy sequence of result pages.
///
/// Each page is requested only when polled. The stream ends after the first
/// page without a next-page token and stops at the first error. Calling this
/// again with the same query restarts from the first page.
pub fn order_pages<'a, A>(
    api: &'a A,
    merchant_id: u64,
    query: ListOrdersQuery,
) -> impl Stream<Item = ClientResult<OrdersListResponse>> + 'a
where
    A: OrdersApi + ?Sized,
{
    stream::try_unfold(Some(query), move |cursor| async move {
        let Some(query) = cursor else {
            return Ok(None);
        };

        let page = api.list(merchant_id, &query).await?;
        let next = page.next_page().map(|token| {
            tracing::debug!(merchant_id, page_token = token, "Following next page");
            query.clone().with_page_token(token)
        });
        Ok::<_, ClientError>(Some((page, next)))
    })
}

/// Drain every page into one list, in page order
pub async fn collect_orders<A>(
    api: &A,
    merchant_id: u64,
    query: ListOrdersQuery,
) -> ClientResult<Vec<Order>>
where
    A: OrdersApi + ?Sized,
{
    order_pages(api, merchant_id, query)
        .map_ok(|page| stream::iter(page.resources.into_iter().map(Ok::<Order, ClientError>)))
        .try_flatten()
        .try_collect()
        .await
}
