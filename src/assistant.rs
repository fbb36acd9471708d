use tracing::info;

const FLOW_SUMMARY: &str = "Auto-launched flow that updates the email address of related contacts when an Account's custom email field changes.";

const TRIGGER_REPLY: &str = "The flow is triggered when the Account's **Email__c** field changes. Since it's an *after-save record-triggered flow*, it runs automatically after the record is updated.";

const GET_CONTACTS_REPLY: &str = "The **Get related contacts** element looks up every Contact linked to the updated Account and stores them in a collection, so the loop has a full set of records to work through.";

const LOOP_REPLY: &str = "The loop, named **Loop all contacts**, iterates through all Contacts related to the Account. For each contact, it checks if the email matches the Account email before updating it.";

const DECISION_REPLY: &str = "The decision element, named **Does email match?**, compares each Contact's email against the Account's new **Email__c** value. Contacts that already match are filtered out, so only mismatched ones move on to be updated.";

const ASSIGNMENT_REPLY: &str = "Inside the loop, the **Assign new email** element copies the Account's **Email__c** value onto the current Contact. The change is staged in memory and written later by the bulk update, keeping DML out of the loop.";

const BULK_UPDATE_REPLY: &str = "Contacts are updated in bulk at the end of the flow using the **Update contacts with new email** element. This ensures only mismatched contacts are updated efficiently.";

const NOTE_REPLY: &str = "At the end of the flow, a **Note** record is created with the title *\"Email updated on related contacts\"*, helping users track when changes were made.";

const COMPLETION_REPLY: &str = "Once the loop finishes, the flow updates the staged contacts in bulk, creates the confirmation **Note**, and reaches its end element. No further work happens after that point.";

const FAULT_REPLY: &str = "In this demo version, there’s no explicit fault path. In a real implementation, you could add a fault connector to handle failed contact updates or note creation.";

const OPTIMIZATION_REPLY: &str = "The flow already follows the main optimization for this pattern: no DML inside the loop. Changed contacts are collected first and written once by the **Update contacts with new email** element, so even large Accounts update in a single bulk operation.";

const FALLBACK_REPLY: &str = "That’s an interesting question! Based on this flow, it primarily handles synchronizing emails between Accounts and their related Contacts.";

enum Keywords {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Keywords {
    // Substring containment against an already-lowercased question, so
    // "note" also matches inside "notebook".
    fn matches(&self, question: &str) -> bool {
        match self {
            Self::Any(words) => words.iter().any(|word| question.contains(word)),
            Self::All(words) => words.iter().all(|word| question.contains(word)),
        }
    }
}

// Scanned top to bottom; the first matching row wins. The order is part of
// the API contract: a question mentioning both a trigger and a loop gets the
// trigger reply. Keywords are lowercase.
const REPLY_RULES: &[(Keywords, &str)] = &[
    (Keywords::Any(&["trigger", "start"]), TRIGGER_REPLY),
    (Keywords::All(&["get", "contact"]), GET_CONTACTS_REPLY),
    (Keywords::Any(&["loop"]), LOOP_REPLY),
    (Keywords::Any(&["decision", "match"]), DECISION_REPLY),
    (Keywords::Any(&["assign", "update email"]), ASSIGNMENT_REPLY),
    (Keywords::All(&["update", "contact"]), BULK_UPDATE_REPLY),
    (Keywords::Any(&["note", "create"]), NOTE_REPLY),
    (Keywords::Any(&["end", "finish"]), COMPLETION_REPLY),
    (Keywords::Any(&["error", "fail"]), FAULT_REPLY),
    (
        Keywords::Any(&["optimize", "improve", "performance"]),
        OPTIMIZATION_REPLY,
    ),
];

pub fn flow_summary(flow_id: &str, ai_model: &str) -> &'static str {
    info!(flow_id = %flow_id, ai_model = %ai_model, "generating canned flow summary");
    FLOW_SUMMARY
}

pub fn chat_reply(question: &str, ai_model: &str) -> &'static str {
    info!(question = %question, ai_model = %ai_model, "generating canned chat reply");
    select_reply(question)
}

fn select_reply(question: &str) -> &'static str {
    let question = question.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(keywords, _)| keywords.matches(&question))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}
