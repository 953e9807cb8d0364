use crate::auth::{AuthOutcome, Authenticator};
use crate::domain::asset::{AssetOrder, AssetVisibility, SearchCriteria};
use crate::dto::review::{PageMeta, PageRequestContext, ReviewPageData};
use crate::i18n::I18n;
use crate::search::SearchBackend;
use crate::services::ServiceResult;

/// Assets fetched per load. The backend never returns more than this.
pub const PAGE_SIZE: usize = 50;

/// Translation key of the quick-review page title.
pub const TITLE_KEY: &str = "review_swipe_title";

/// Result of a page load: either the complete page data or a redirect the
/// HTTP layer must issue instead of rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum PageLoad {
    Page(ReviewPageData),
    Redirect(String),
}

/// Loads the quick-review page.
///
/// Steps run strictly in order: authenticate, acquire a formatter for the
/// request locale, fetch the newest timeline assets, assemble the view
/// model. An auth redirect short-circuits the load before any search call;
/// every collaborator failure propagates unchanged. No partial page data is
/// ever produced.
pub async fn load_review_page<A, S>(
    auth: &A,
    i18n: &I18n,
    search: &S,
    ctx: &PageRequestContext,
) -> ServiceResult<PageLoad>
where
    A: Authenticator + ?Sized,
    S: SearchBackend + ?Sized,
{
    match auth.authenticate(ctx)? {
        AuthOutcome::Redirect(target) => return Ok(PageLoad::Redirect(target)),
        AuthOutcome::Proceed => {}
    }

    let locale = ctx.locale.as_deref().unwrap_or(i18n.default_locale());
    let formatter = i18n.formatter(locale)?;

    let criteria = SearchCriteria::new(AssetVisibility::Timeline)
        .order(AssetOrder::Desc)
        .paginate(1, PAGE_SIZE);
    let result = search.search_assets(&criteria).await?;

    Ok(PageLoad::Page(ReviewPageData {
        assets: result.items,
        meta: PageMeta {
            title: formatter.translate(TITLE_KEY),
        },
    }))
}
