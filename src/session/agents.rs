/// Connection parameters for the model deployment behind an agent.
#[derive(Clone, Debug)]
pub struct DeploymentParams {
    pub model_id: String,
    pub project_id: String,
}

/// A selectable persona: display fields plus the instruction text that
/// forms the model's behavioral contract. The catalog is compiled in
/// and immutable at runtime.
#[derive(Clone, Debug)]
pub struct AgentDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub deployment: DeploymentParams,
    demo_template: String,
}

impl AgentDefinition {
    /// Canned reply used in demo mode when no API key is configured.
    pub fn demo_reply(&self, input: &str) -> String {
        self.demo_template.replace("{input}", input)
    }
}

fn agent(
    id: &str,
    name: &str,
    description: &str,
    instructions: &str,
    demo_template: &str,
) -> AgentDefinition {
    AgentDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        instructions: instructions.to_string(),
        deployment: DeploymentParams {
            model_id: "ibm/granite-3-8b-instruct".to_string(),
            project_id: "00000000-0000-0000-0000-000000000000".to_string(),
        },
        demo_template: demo_template.to_string(),
    }
}

/// The built-in agent catalog.
pub fn builtin_agents() -> Vec<AgentDefinition> {
    vec![
        agent(
            "emailRewriter",
            "Email Rewriter",
            "Turns rough notes into a polished, professional email.",
            "You are a business communication assistant. Rewrite the user's text \
             as a clear, courteous, professional email. Preserve the meaning, fix \
             tone and grammar, and add a suitable greeting and sign-off. Reply \
             with the email only.",
            "Subject: Quick follow-up\n\nHi team,\n\nI wanted to follow up on the \
             following: {input}. Please let me know if you have any questions.\n\n\
             Best regards",
        ),
        agent(
            "meetingSummarizer",
            "Meeting Summarizer",
            "Condenses meeting notes into key points and action items.",
            "You are a meeting assistant. Summarize the user's notes into a short \
             list of key decisions followed by action items with owners where \
             mentioned. Be concise and keep the original wording for names and \
             dates.",
            "Key points:\n- {input}\n\nAction items:\n- Review the notes above and \
             confirm owners for each follow-up.",
        ),
        agent(
            "knowledgeAssistant",
            "Knowledge Assistant",
            "Answers questions from the product knowledge base.",
            "You are a support assistant for the product knowledge base. Answer \
             the user's question factually and cite the relevant article title \
             when you can. If the answer is not in the knowledge base, say so \
             rather than guessing.",
            "Based on the knowledge base, here is what I found about \"{input}\": \
             this topic is covered in the getting-started guide. Connect an API \
             key to get grounded answers.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_reply_substitutes_input() {
        let agents = builtin_agents();
        let rewriter = agents.iter().find(|a| a.id == "emailRewriter").unwrap();
        let reply = rewriter.demo_reply("can you send the report");
        assert!(reply.contains("can you send the report"));
        assert!(!reply.contains("{input}"));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let agents = builtin_agents();
        let mut ids: Vec<_> = agents.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), agents.len());
    }
}
