//! Local responder used when the backend cannot answer.

use chrono::Utc;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::ChatReply;

/// Canned acknowledgements, in Malagasy.
pub const FALLBACK_RESPONSES: &[&str] = &[
    "Salama! Inona no azoko atao ho anao androany?",
    "Tsara ny fanontanianao! Azoko ho tanterahina izany.",
    "Mirary soa aho amin'ny andro ho avy!",
    "Misaotra anao! Mila fanampiana hafa ve ianao?",
    "Eny ary, izaho eto mba hanampy anao.",
    "Tsara ny fiainana, tsy misy olana!",
    "Ahoana ny fiainanao ankehitriny?",
    "Raha misy zavatra hafa ilainao, ampahafantaro ahy fotsiny.",
    "Faly aho mahafantatra anao!",
    "Vonona hanompo anao foana aho.",
];

/// Pick one phrase uniformly at random. An empty pool falls back to the
/// first canned phrase.
pub fn pick_fallback<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or(FALLBACK_RESPONSES[0])
}

/// Session id for a conversation the backend never saw.
pub(super) fn simulated_conversation_id() -> String {
    format!("sim_{}", Utc::now().timestamp_millis())
}

/// Build a reply without the backend. A supplied non-empty id is kept.
pub(super) fn simulate<R: Rng + ?Sized>(rng: &mut R, conversation_id: Option<&str>) -> ChatReply {
    let conversation_id = conversation_id
        .filter(|id| !id.is_empty())
        .map_or_else(simulated_conversation_id, ToString::to_string);

    ChatReply {
        response: pick_fallback(rng, FALLBACK_RESPONSES).to_string(),
        conversation_id: Some(conversation_id),
    }
}
