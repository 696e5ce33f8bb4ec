//! Client-side session logic: the agent catalog, the per-day usage
//! bookkeeping, and the chat session state machine. Storage and the
//! proxy call are behind traits so the whole surface runs against
//! in-memory doubles in tests.

pub mod agents;
pub mod chat;
pub mod storage;
pub mod usage;

pub use agents::{AgentDefinition, builtin_agents};
pub use chat::{
    ChatReply, ChatSession, ChatTransport, HttpTransport, SessionConfig, SessionError,
    SessionState,
};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use usage::{DAILY_LIMIT, UsageRecord};
