use super::*;

const FEED_ROUTE: &str = "api/ws";

/// Derives the socket endpoint from the page URL the server is reached at:
/// http becomes ws, https becomes wss, and the fixed feed route is appended
/// to the path.
pub(crate) fn feed_endpoint(site: &Url) -> Result<Url> {
  let scheme = match site.scheme() {
    "http" => "ws",
    "https" => "wss",
    other => bail!("unsupported scheme `{other}`, expected http or https"),
  };

  let mut endpoint = site.clone();

  endpoint
    .set_scheme(scheme)
    .map_err(|()| anyhow!("could not rewrite scheme for {site}"))?;

  endpoint.set_query(None);
  endpoint.set_fragment(None);

  if !endpoint.path().ends_with('/') {
    let path = format!("{}/", endpoint.path());
    endpoint.set_path(&path);
  }

  Ok(endpoint.join(FEED_ROUTE)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn endpoint(site: &str) -> Result<Url> {
    feed_endpoint(&Url::parse(site).expect("valid test url"))
  }

  #[test]
  fn http_becomes_ws() {
    assert_eq!(
      endpoint("http://localhost:4000/").unwrap().as_str(),
      "ws://localhost:4000/api/ws"
    );
  }

  #[test]
  fn https_becomes_wss() {
    assert_eq!(
      endpoint("https://news.example.com/").unwrap().as_str(),
      "wss://news.example.com/api/ws"
    );
  }

  #[test]
  fn route_is_appended_after_existing_path() {
    assert_eq!(
      endpoint("http://example.com/feeds").unwrap().as_str(),
      "ws://example.com/feeds/api/ws"
    );

    assert_eq!(
      endpoint("http://example.com/feeds/").unwrap().as_str(),
      "ws://example.com/feeds/api/ws"
    );
  }

  #[test]
  fn query_and_fragment_are_dropped() {
    assert_eq!(
      endpoint("https://example.com/?tab=new#top").unwrap().as_str(),
      "wss://example.com/api/ws"
    );
  }

  #[test]
  fn non_http_scheme_is_rejected() {
    assert!(endpoint("ftp://example.com/").is_err());
  }
}
