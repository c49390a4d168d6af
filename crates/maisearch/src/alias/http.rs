use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::alias::{AliasCandidate, AliasLookup, AliasProvider, PendingVote};
use crate::chart::song_id_from_any;
use crate::error::{Error, Result};

/// Vote entry as returned by the alias service
#[derive(Debug, Deserialize)]
struct RemoteVote {
    #[serde(rename = "Tag")]
    tag: String,
    #[serde(rename = "SongID", deserialize_with = "song_id_from_any")]
    song_id: String,
    #[serde(rename = "ApplyAlias", default)]
    apply_alias: String,
}

/// Song entry as returned by the alias service
#[derive(Debug, Deserialize)]
struct RemoteSong {
    #[serde(rename = "SongID", deserialize_with = "song_id_from_any")]
    song_id: String,
    #[serde(rename = "Name", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteEntry {
    // Votes carry a `Tag`; try them first so a vote is never read as a song.
    Vote(RemoteVote),
    Song(RemoteSong),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteBody {
    Envelope {
        #[serde(default)]
        content: Vec<RemoteEntry>,
    },
    List(Vec<RemoteEntry>),
}

impl RemoteBody {
    fn into_entries(self) -> Vec<RemoteEntry> {
        match self {
            RemoteBody::Envelope { content } => content,
            RemoteBody::List(entries) => entries,
        }
    }
}

/// Turn service entries into a lookup result.
///
/// Any vote in the answer means the alias is still disputed, so votes win
/// over song entries.
fn classify(alias: &str, entries: Vec<RemoteEntry>) -> Result<AliasLookup> {
    if entries.is_empty() {
        return Err(Error::AliasNotFound(alias.to_string()));
    }

    let (votes, songs): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|e| matches!(e, RemoteEntry::Vote(_)));

    if !votes.is_empty() {
        let votes = votes
            .into_iter()
            .filter_map(|e| match e {
                RemoteEntry::Vote(v) => Some(PendingVote {
                    tag: v.tag,
                    song_id: v.song_id,
                    alias: if v.apply_alias.is_empty() {
                        alias.to_string()
                    } else {
                        v.apply_alias
                    },
                }),
                RemoteEntry::Song(_) => None,
            })
            .collect();
        return Ok(AliasLookup::PendingVotes(votes));
    }

    let songs = songs
        .into_iter()
        .filter_map(|e| match e {
            RemoteEntry::Song(s) => Some(AliasCandidate::new(s.song_id, s.name)),
            RemoteEntry::Vote(_) => None,
        })
        .collect();
    Ok(AliasLookup::Songs(songs))
}

/// Map a service response onto a lookup result.
///
/// 404 means the alias is unknown. Any other error status or an
/// undecodable body means the service is unusable right now.
fn interpret(alias: &str, status: StatusCode, body: &[u8]) -> Result<AliasLookup> {
    if status == StatusCode::NOT_FOUND {
        return Err(Error::AliasNotFound(alias.to_string()));
    }
    if !status.is_success() {
        return Err(Error::ProviderUnavailable(format!(
            "alias service answered HTTP {}",
            status.as_u16()
        )));
    }

    let body: RemoteBody = serde_json::from_slice(body)
        .map_err(|e| Error::ProviderUnavailable(format!("undecodable alias response: {}", e)))?;
    classify(alias, body.into_entries())
}

/// Alias service client
#[derive(Clone)]
pub struct HttpAliasProvider {
    client: Client,
    endpoint: String,
}

impl HttpAliasProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ProviderUnavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }
}

impl AliasProvider for HttpAliasProvider {
    async fn lookup(&self, alias: &str) -> Result<AliasLookup> {
        let url = format!("{}/getsongs", self.endpoint);
        debug!("Querying alias service for {:?}", alias);

        let response = self
            .client
            .get(&url)
            .query(&[("name", alias)])
            .send()
            .await
            .map_err(|e| Error::ProviderUnavailable(Error::from(e).to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::ProviderUnavailable(Error::from(e).to_string()))?;

        interpret(alias, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<RemoteEntry> {
        serde_json::from_str::<RemoteBody>(json).unwrap().into_entries()
    }

    #[test]
    fn test_classify_songs() {
        let entries = parse(r#"[{"SongID": 8, "Name": "True Love Song", "Alias": ["tls"]}]"#);
        let lookup = classify("tls", entries).unwrap();
        assert_eq!(
            lookup,
            AliasLookup::Songs(vec![AliasCandidate::new("8", "True Love Song")])
        );
    }

    #[test]
    fn test_classify_votes() {
        let entries = parse(
            r#"{"status_code": 200, "content": [
                {"Tag": "a1b2", "SongID": 11663, "ApplyAlias": "lol", "Votes": 3}
            ]}"#,
        );
        let lookup = classify("lol", entries).unwrap();
        assert_eq!(
            lookup,
            AliasLookup::PendingVotes(vec![PendingVote {
                tag: "a1b2".into(),
                song_id: "11663".into(),
                alias: "lol".into(),
            }])
        );
    }

    #[test]
    fn test_classify_empty_is_not_found() {
        let err = classify("none", parse("[]")).unwrap_err();
        assert!(matches!(err, Error::AliasNotFound(_)));
    }

    #[test]
    fn test_interpret_not_found_status() {
        let err = interpret("none", StatusCode::NOT_FOUND, b"").unwrap_err();
        assert!(matches!(err, Error::AliasNotFound(ref a) if a == "none"));
    }

    #[test]
    fn test_interpret_error_status_is_unavailable() {
        for status in [StatusCode::INTERNAL_SERVER_ERROR, StatusCode::BAD_REQUEST] {
            let err = interpret("lol", status, b"[]").unwrap_err();
            assert!(matches!(err, Error::ProviderUnavailable(_)));
        }
    }

    #[test]
    fn test_interpret_undecodable_body_is_unavailable() {
        let err = interpret("lol", StatusCode::OK, b"<html>busy</html>").unwrap_err();
        assert!(matches!(err, Error::ProviderUnavailable(_)));
    }

    #[test]
    fn test_interpret_success_body() {
        let lookup = interpret(
            "tls",
            StatusCode::OK,
            br#"{"content": [{"SongID": "8", "Name": "True Love Song"}]}"#,
        )
        .unwrap();
        assert_eq!(
            lookup,
            AliasLookup::Songs(vec![AliasCandidate::new("8", "True Love Song")])
        );
        assert!(matches!(
            interpret("tls", StatusCode::OK, b"[]"),
            Err(Error::AliasNotFound(_))
        ));
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let provider = HttpAliasProvider::new("http://localhost/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(provider.endpoint, "http://localhost/api");
    }
}
