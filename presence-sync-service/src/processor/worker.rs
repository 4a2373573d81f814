use std::sync::Arc;

use crate::Result;
use cache::{Cache, CacheError, PresenceResolver, ResolvedUser};
use model::user::PresenceUpdate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, trace, warn};

use super::{Dispatch, Event};

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;
#[cfg(feature = "metrics")]
use prometheus::{register_counter_vec, CounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    static ref EVENT_COUNTER: CounterVec = register_counter_vec!(
        "presence_sync_events",
        "Number of dispatch events applied to the cache",
        &["event_type"]
    )
    .unwrap();
    static ref UNRESOLVED_COUNTER: CounterVec = register_counter_vec!(
        "presence_sync_unresolved",
        "Number of presence updates that could not be fully resolved",
        &["reason"]
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped,
    /// A presence referring to a guild or member the cache does not hold.
    Unresolved,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub frames: usize,
    pub applied: usize,
    pub skipped: usize,
    pub unresolved: usize,
    pub malformed: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Applied => self.applied += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Unresolved => self.unresolved += 1,
        }
    }
}

pub struct Worker<C: Cache> {
    cache: Arc<C>,
}

impl<C: Cache> Worker<C> {
    pub fn new(cache: Arc<C>) -> Self {
        Self { cache }
    }

    /// Applies every line of `reader` until EOF. Lines that fail to decode or
    /// apply are logged and counted, they do not stop the stream.
    pub async fn run<R: AsyncBufRead + Unpin>(&self, reader: R) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            summary.frames += 1;
            match self.handle_line(&line) {
                Ok(outcome) => summary.record(outcome),
                Err(e) => {
                    error!(error = %e, "Failed to handle frame");
                    summary.malformed += 1;
                }
            }
        }

        debug!(?summary, "Reached end of input");
        Ok(summary)
    }

    pub fn handle_line(&self, line: &str) -> Result<Outcome> {
        let payload: Dispatch = serde_json::from_str(line)?;

        trace!(?payload, "Received frame");

        match payload.into_event()? {
            Some(event) => self.handle_event(event),
            None => Ok(Outcome::Skipped),
        }
    }

    pub fn handle_event(&self, event: Event) -> Result<Outcome> {
        #[cfg(feature = "metrics")]
        EVENT_COUNTER.with_label_values(&[event.name()]).inc();

        match event {
            Event::GuildCreate(g) => self.cache.store_guild(g)?,
            Event::GuildUpdate(g) => self.cache.store_guild(g)?,
            Event::GuildDelete(g) => {
                if g.was_removed() {
                    self.cache.delete_guild(g.id)?
                } else {
                    debug!(guild_id = %g.id, "Guild became unavailable, keeping cached state");
                }
            }
            Event::GuildMemberAdd(ev) => self.cache.store_member(ev.member, ev.guild_id)?,
            Event::GuildMemberRemove(ev) => self.cache.delete_member(ev.user.id, ev.guild_id)?,
            Event::GuildMemberUpdate(ev) => {
                let guild_id = ev.guild_id;
                self.cache.store_member(ev.into(), guild_id)?
            }
            Event::GuildMembersChunk(ev) => {
                self.cache.store_members(ev.members, ev.guild_id)?;
                for mut presence in ev.presences.unwrap_or_default() {
                    presence.guild_id = Some(ev.guild_id);
                    let user_id = presence.user_id();

                    if let Err(e) = self.cache.store_presence(presence) {
                        warn!(
                            error = %e,
                            guild_id = %ev.guild_id,
                            ?user_id,
                            "Skipping chunk presence"
                        );
                    }
                }
            }
            Event::PresenceUpdate(presence) => return self.handle_presence(presence),
            Event::UserUpdate(user) => self.cache.store_user(user)?,
        };

        Ok(Outcome::Applied)
    }

    fn handle_presence(&self, presence: PresenceUpdate) -> Result<Outcome> {
        let resolver = PresenceResolver::new(&presence, self.cache.as_ref());

        let user = resolver.user()?;
        let game = resolver.game().map(|activity| activity.describe());

        match resolver.guild() {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                self.unresolved(&user, &presence, "guild");
                return Ok(Outcome::Unresolved);
            }
            // Left to store_presence, which decides whether it can be kept.
            Err(CacheError::StoreDisabled) => {}
            Err(e) => return Err(e.into()),
        }

        match resolver.member() {
            Ok(Some(member)) => {
                debug!(
                    user = %user.tag(),
                    cached = user.is_cached(),
                    nick = ?member.display_name(),
                    status = %presence.status,
                    ?game,
                    "Presence updated"
                );
            }
            Ok(None) => self.unresolved(&user, &presence, "member"),
            Err(CacheError::StoreDisabled) => {
                debug!(
                    user = %user.tag(),
                    status = %presence.status,
                    ?game,
                    "Presence updated, members are not cached"
                );
            }
            Err(e) => return Err(e.into()),
        }

        self.store_presence(presence)
    }

    fn unresolved(&self, user: &ResolvedUser, presence: &PresenceUpdate, reason: &'static str) {
        warn!(
            user_id = %user.id,
            guild_id = ?presence.guild_id,
            reason,
            "Presence update for uncached {}",
            reason
        );

        #[cfg(feature = "metrics")]
        UNRESOLVED_COUNTER.with_label_values(&[reason]).inc();
    }

    fn store_presence(&self, presence: PresenceUpdate) -> Result<Outcome> {
        let guild_id = presence.guild_id;

        match self.cache.store_presence(presence) {
            Ok(()) => Ok(Outcome::Applied),
            // Evicted between resolving and storing.
            Err(CacheError::GuildNotFound(_)) => {
                debug!(?guild_id, "Guild no longer cached, dropping presence");
                Ok(Outcome::Unresolved)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cache::{MemoryCache, Options};
    use model::user::StatusType;
    use model::Snowflake;

    const GUILD_CREATE: &str = r#"{"op":0,"s":1,"t":"GUILD_CREATE","d":{"id":"10","name":"chess club","icon":null,"owner_id":"1","members":[{"user":{"id":"1","username":"magnus","discriminator":"0","avatar":null},"roles":[],"joined_at":"2020-03-01T00:00:00+00:00"}],"presences":[{"user":{"id":"1"},"status":"offline"}]}}"#;

    fn worker() -> (Arc<MemoryCache>, Worker<MemoryCache>) {
        worker_with(Options::default())
    }

    fn worker_with(opts: Options) -> (Arc<MemoryCache>, Worker<MemoryCache>) {
        let cache = Arc::new(MemoryCache::new(opts));
        (Arc::clone(&cache), Worker::new(cache))
    }

    fn presence_frame(user_id: u64, guild_id: u64, status: &str) -> String {
        format!(
            r#"{{"op":0,"s":2,"t":"PRESENCE_UPDATE","d":{{"user":{{"id":"{}"}},"guild_id":"{}","status":"{}","activities":[{{"name":"Chess"}},{{"name":"Music","type":2}}]}}}}"#,
            user_id, guild_id, status
        )
    }

    #[test]
    fn test_presence_for_cached_member() {
        let (cache, worker) = worker();
        assert_eq!(worker.handle_line(GUILD_CREATE).unwrap(), Outcome::Applied);

        let stored = cache.get_presence(Snowflake(1), Snowflake(10)).unwrap().unwrap();
        assert_eq!(stored.status, StatusType::Offline);

        assert_eq!(
            worker.handle_line(&presence_frame(1, 10, "online")).unwrap(),
            Outcome::Applied
        );

        let stored = cache.get_presence(Snowflake(1), Snowflake(10)).unwrap().unwrap();
        assert_eq!(stored.status, StatusType::Online);
        assert_eq!(stored.game().map(|a| a.name.as_str()), Some("Chess"));
    }

    #[test]
    fn test_presence_for_uncached_guild() {
        let (cache, worker) = worker();

        assert_eq!(
            worker.handle_line(&presence_frame(1, 10, "online")).unwrap(),
            Outcome::Unresolved
        );
        assert_eq!(cache.get_guild_count().unwrap(), 0);
    }

    #[test]
    fn test_presence_for_non_member_is_stored() {
        let (cache, worker) = worker();
        worker.handle_line(GUILD_CREATE).unwrap();

        assert_eq!(
            worker.handle_line(&presence_frame(5, 10, "idle")).unwrap(),
            Outcome::Applied
        );
        assert!(cache.get_presence(Snowflake(5), Snowflake(10)).unwrap().is_some());
    }

    #[test]
    fn test_presence_without_user_fails() {
        let (_, worker) = worker();
        worker.handle_line(GUILD_CREATE).unwrap();

        let frame = r#"{"op":0,"s":3,"t":"PRESENCE_UPDATE","d":{"guild_id":"10","status":"online"}}"#;
        assert!(worker.handle_line(frame).is_err());
    }

    #[test]
    fn test_guild_delete() {
        let (cache, worker) = worker();
        worker.handle_line(GUILD_CREATE).unwrap();

        let outage = r#"{"op":0,"s":4,"t":"GUILD_DELETE","d":{"id":"10","unavailable":true}}"#;
        worker.handle_line(outage).unwrap();
        assert_eq!(cache.get_guild_count().unwrap(), 1);

        let removed = r#"{"op":0,"s":5,"t":"GUILD_DELETE","d":{"id":"10"}}"#;
        worker.handle_line(removed).unwrap();
        assert_eq!(cache.get_guild_count().unwrap(), 0);
    }

    #[test]
    fn test_members_chunk_presences() {
        let (cache, worker) = worker();
        worker.handle_line(GUILD_CREATE).unwrap();

        let chunk = r#"{"op":0,"s":6,"t":"GUILD_MEMBERS_CHUNK","d":{"guild_id":"10","chunk_index":0,"chunk_count":1,"members":[{"user":{"id":"2","username":"hikaru","discriminator":"0","avatar":null},"roles":[],"joined_at":"2021-01-01T00:00:00+00:00"}],"presences":[{"user":{"id":"2"},"status":"dnd"}]}}"#;
        assert_eq!(worker.handle_line(chunk).unwrap(), Outcome::Applied);

        assert!(cache.get_member(Snowflake(2), Snowflake(10)).unwrap().is_some());
        let presence = cache.get_presence(Snowflake(2), Snowflake(10)).unwrap().unwrap();
        assert_eq!(presence.status, StatusType::Dnd);
    }

    #[test]
    fn test_members_chunk_skips_bad_presence() {
        let (cache, worker) = worker();
        worker.handle_line(GUILD_CREATE).unwrap();

        let chunk = r#"{"op":0,"s":7,"t":"GUILD_MEMBERS_CHUNK","d":{"guild_id":"10","chunk_index":0,"chunk_count":1,"members":[{"user":{"id":"2","username":"hikaru","discriminator":"0","avatar":null},"roles":[],"joined_at":"2021-01-01T00:00:00+00:00"}],"presences":[{"status":"online"},{"user":{"id":"2"},"status":"idle"}]}}"#;
        assert_eq!(worker.handle_line(chunk).unwrap(), Outcome::Applied);

        let presence = cache.get_presence(Snowflake(2), Snowflake(10)).unwrap().unwrap();
        assert_eq!(presence.status, StatusType::Idle);
    }

    #[test]
    fn test_presence_stored_without_member_store() {
        let (cache, worker) = worker_with(Options::new(true, true, false, true));
        worker.handle_line(GUILD_CREATE).unwrap();

        assert_eq!(
            worker.handle_line(&presence_frame(1, 10, "online")).unwrap(),
            Outcome::Applied
        );
        let stored = cache.get_presence(Snowflake(1), Snowflake(10)).unwrap().unwrap();
        assert_eq!(stored.status, StatusType::Online);
    }

    #[test]
    fn test_presence_stored_without_user_store() {
        let (cache, worker) = worker_with(Options::new(false, true, true, true));
        worker.handle_line(GUILD_CREATE).unwrap();

        assert_eq!(
            worker.handle_line(&presence_frame(1, 10, "dnd")).unwrap(),
            Outcome::Applied
        );
        let stored = cache.get_presence(Snowflake(1), Snowflake(10)).unwrap().unwrap();
        assert_eq!(stored.status, StatusType::Dnd);
    }

    #[test]
    fn test_presence_without_guild_store() {
        let (_, worker) = worker_with(Options::new(true, false, true, true));

        assert_eq!(
            worker.handle_line(&presence_frame(1, 10, "online")).unwrap(),
            Outcome::Unresolved
        );
    }

    #[tokio::test]
    async fn test_run_counts_outcomes() {
        let (cache, worker) = worker();

        let input = [
            GUILD_CREATE.to_string(),
            r#"{"op":11}"#.to_string(),
            String::new(),
            "not json".to_string(),
            presence_frame(1, 10, "online"),
            presence_frame(1, 99, "online"),
        ]
        .join("\n");

        let summary = worker.run(input.as_bytes()).await.unwrap();

        assert_eq!(
            summary,
            Summary {
                frames: 5,
                applied: 2,
                skipped: 1,
                unresolved: 1,
                malformed: 1,
            }
        );
        assert!(cache.get_presence(Snowflake(1), Snowflake(10)).unwrap().is_some());
    }
}
