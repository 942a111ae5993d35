//! Platform-neutral view of the interactions the poll router cares about

use super::poll::Submitter;

#[derive(Debug, Clone, PartialEq)]
pub enum InboundInteraction {
    Command(CommandInvocation),
    Button(ButtonClick),
    ModalSubmit(ModalSubmission),
    /// Autocomplete, pings and component kinds the router never handles
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    pub interaction_id: u64,
    pub name: String,
    pub title: Option<String>,
    pub question: Option<String>,
    pub duration: Option<String>,
    pub results_channel: Option<u64>,
    pub user: Submitter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonClick {
    pub custom_id: String,
    pub message_id: u64,
    /// Title of the clicked message's first embed, if it has one
    pub message_title: Option<String>,
    pub user: Submitter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalSubmission {
    pub custom_id: String,
    /// (input custom_id, submitted value) in form order
    pub fields: Vec<(String, String)>,
    pub user: Submitter,
}

impl ModalSubmission {
    /// Value of the input named `input_id`, falling back to the first input
    pub fn value(&self, input_id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(id, _)| id == input_id)
            .or_else(|| self.fields.first())
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(fields: &[(&str, &str)]) -> ModalSubmission {
        ModalSubmission {
            custom_id: "opinionModal_1_2".to_string(),
            fields: fields
                .iter()
                .map(|(id, v)| (id.to_string(), v.to_string()))
                .collect(),
            user: Submitter {
                id: 7,
                tag: "user#0007".to_string(),
            },
        }
    }

    #[test]
    fn test_value_by_id() {
        let s = submission(&[("other", "x"), ("pollAnswer", "Pasta")]);
        assert_eq!(s.value("pollAnswer"), Some("Pasta"));
    }

    #[test]
    fn test_value_falls_back_to_first_input() {
        let s = submission(&[("opinionInput", "Legacy answer")]);
        assert_eq!(s.value("pollAnswer"), Some("Legacy answer"));
    }

    #[test]
    fn test_value_missing() {
        assert_eq!(submission(&[]).value("pollAnswer"), None);
    }
}
