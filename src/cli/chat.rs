use std::env;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::session::{ChatSession, HttpTransport, MemoryStorage, SessionConfig, SessionError};

fn print_greeting<S, T>(session: &ChatSession<S, T>)
where
    S: crate::session::KeyValueStorage,
    T: crate::session::ChatTransport,
{
    if let Some(greeting) = session.transcript().first() {
        println!("{}", greeting.content);
    }
}

pub async fn run(agent_id: &str, proxy_url: &str) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let mut session = ChatSession::new(
        SessionConfig::default(),
        MemoryStorage::new(),
        HttpTransport::new(proxy_url),
    );

    if let Ok(api_key) = env::var("AGENTDESK_API_KEY") {
        session.set_api_key(&api_key);
    } else {
        println!("No AGENTDESK_API_KEY set, replies are canned demo responses.");
    }

    session.select_agent(agent_id)?;
    print_greeting(&session);

    // Switch personas with `/agent <id>`, exit with ctrl-c or ctrl-d
    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Some(next) = line.strip_prefix("/agent ") {
                    match session.select_agent(next.trim()) {
                        Ok(()) => print_greeting(&session),
                        Err(err) => println!("{}", err),
                    }
                    continue;
                }
                match session.submit(line.as_str()).await {
                    Ok(reply) => println!("{}", reply.content),
                    Err(SessionError::SendFailed(message)) => println!("Error: {}", message),
                    Err(err) => println!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
