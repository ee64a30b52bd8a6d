use leptos::prelude::*;

/// One line of the scripted terminal session.
enum DemoLine {
    Prompt { input: &'static str, cursor: bool },
    Response { text: &'static str, matched: Option<(&'static str, &'static str)> },
}

const SESSION: [DemoLine; 5] = [
    DemoLine::Prompt { input: "Help me set up Stripe payments", cursor: false },
    DemoLine::Response {
        text: "  ↳ Matched: ",
        matched: Some(("stripe-integration", " skill")),
    },
    DemoLine::Response { text: "  ↳ Loading CLI auth workflow...", matched: None },
    DemoLine::Response { text: "  ↳ Configuring checkout, webhooks, products", matched: None },
    DemoLine::Prompt { input: "", cursor: true },
];

/// Terminal replay of a skill being matched. Lines start hidden and the
/// page script reveals them in order once the terminal scrolls into view.
#[component]
pub fn Demo() -> impl IntoView {
    view! {
        <section id="demo" class="section">
            <div class="container-narrow">
                <div class="section-header" data-reveal="">
                    <p class="section-eyebrow">"See It In Action"</p>
                    <h2 class="section-title">"Skills activate automatically"</h2>
                </div>

                <div class="terminal" data-role="demo-terminal">
                    <div class="terminal-header">
                        <div class="terminal-dot red"></div>
                        <div class="terminal-dot yellow"></div>
                        <div class="terminal-dot green"></div>
                        <span class="terminal-title">"claude"</span>
                    </div>
                    <div class="terminal-body">
                        {SESSION.iter().map(render_line).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_line(line: &DemoLine) -> AnyView {
    match *line {
        DemoLine::Prompt { input, cursor } => view! {
            <div class="terminal-line prompt" data-demo-line="">
                <span class="terminal-prompt">"> "</span>
                <span class="terminal-input">{input}</span>
                {cursor.then(|| view! { <span class="terminal-cursor"></span> })}
            </div>
        }
        .into_any(),
        DemoLine::Response { text, matched } => view! {
            <div class="terminal-line" data-demo-line="">
                <span>{text}</span>
                {matched.map(|(skill, suffix)| {
                    view! {
                        <span class="terminal-match">{skill}</span>
                        <span>{suffix}</span>
                    }
                })}
            </div>
        }
        .into_any(),
    }
}
