use gloo_net::http::Request;

pub mod contact;

// fetch a markup fragment
//
// fragments are static html snippets that the site swaps into the page without a full
// reload.  the body is returned verbatim; anything other than a 2xx status is an error,
// since static hosts tend to answer a missing file with a styled 404 page that we do not
// want injected into the content container
pub async fn fetch_fragment(path: &str) -> anyhow::Result<String> {
    let resp = Request::get(path).send().await?;

    if resp.ok() {
        Ok(resp.text().await?)
    } else {
        Err(anyhow::Error::msg(format!(
            "fragment {path} returned status {}",
            resp.status()
        )))
    }
}
