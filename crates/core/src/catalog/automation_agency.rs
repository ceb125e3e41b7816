use crate::color::ColorTag;
use crate::model::{ContentBlock, OverlayContent, OverlaySection, Page, Tab, TopicSection};

use super::slugs;

pub(super) fn page() -> Page {
    Page::new(slugs::AUTOMATION_AGENCY, "Automation Agency")
        .with_tagline("Sell time back to small businesses by automating their busywork.")
        .with_tab(foundations())
        .with_tab(client_acquisition())
        .with_tab(delivery())
}

fn foundations() -> Tab {
    Tab::new("foundations", "Foundations")
        .with_icon("🧱")
        .with_intro("Choose the tools and the offer before chasing clients.")
        .with_topic(
            TopicSection::new("tool-stack", "Tool Stack", ColorTag::Blue)
                .with_icon("🧰")
                .with_description("The handful of platforms that cover most client requests.")
                .with_overlay(
                    OverlayContent::new("Tool Stack Guide")
                        .with_section(
                            OverlaySection::new("Workflow platforms", ColorTag::Blue)
                                .with_block(ContentBlock::paragraph(
                                    "Most small-business automations are glue between a form, a \
                                     spreadsheet, an inbox, and a CRM. Master one workflow \
                                     platform deeply before adding a second.",
                                ))
                                .with_resource("Make", "https://www.make.com")
                                .with_resource("Zapier", "https://zapier.com")
                                .with_resource("n8n", "https://n8n.io"),
                        )
                        .with_section(
                            OverlaySection::new("AI building blocks", ColorTag::Purple)
                                .with_block(ContentBlock::bullets([
                                    "A language model API for drafting and classification",
                                    "A transcription service for calls and voice notes",
                                    "A vector store for document search",
                                ]))
                                .with_checklist([
                                    "Accounts created on one workflow platform",
                                    "Three template automations built",
                                ]),
                        ),
                ),
        )
        .with_topic(
            TopicSection::new("offer-design", "Offer Design", ColorTag::Green)
                .with_icon("📦")
                .with_description("Package automation as an outcome, not as hours.")
                .with_overlay(
                    OverlayContent::new("Offer Design Guide")
                        .with_description("Clients buy saved hours and fewer mistakes.")
                        .with_section(
                            OverlaySection::new("Productize", ColorTag::Green)
                                .with_block(ContentBlock::steps([
                                    "Pick one industry",
                                    "List its five most repetitive tasks",
                                    "Bundle the top three into a fixed-price package",
                                ]))
                                .with_block(ContentBlock::tip(
                                    "Pricing",
                                    "Anchor the price to the monthly hours saved, then add a \
                                     maintenance retainer.",
                                )),
                        ),
                ),
        )
}

fn client_acquisition() -> Tab {
    Tab::new("client-acquisition", "Client Acquisition")
        .with_icon("🤝")
        .with_intro("Land the first three clients, then turn them into case studies.")
        .with_topic(
            TopicSection::new("outreach", "Outreach", ColorTag::Orange)
                .with_icon("📨")
                .with_description("Cold email and direct messages that start conversations.")
                .with_overlay(
                    OverlayContent::new("Outreach Guide")
                        .with_section(
                            OverlaySection::new("Build the list", ColorTag::Orange)
                                .with_block(ContentBlock::bullets([
                                    "Fifty businesses in one industry and region",
                                    "Owner or operations manager as contact",
                                    "One observed inefficiency per business",
                                ]))
                                .with_resource("Apollo", "https://www.apollo.io"),
                        )
                        .with_section(
                            OverlaySection::new("Write the message", ColorTag::Yellow)
                                .with_block(ContentBlock::paragraph(
                                    "Lead with the inefficiency you noticed, offer a short demo \
                                     built on their own process, and ask for fifteen minutes.",
                                ))
                                .with_checklist([
                                    "List of fifty prospects",
                                    "Three message variants drafted",
                                    "Follow-up sequence scheduled",
                                ]),
                        ),
                ),
        )
        .with_topic(
            TopicSection::new("discovery-calls", "Discovery Calls", ColorTag::Purple)
                .with_icon("📞")
                .with_description("Diagnose before you prescribe.")
                .with_overlay(
                    OverlayContent::new("Discovery Call Guide").with_section(
                        OverlaySection::new("Call structure", ColorTag::Purple)
                            .with_block(ContentBlock::steps([
                                "Ask them to walk through a normal week",
                                "Time the repetitive steps together",
                                "Quantify the cost of errors",
                                "Propose one automation and its payback period",
                            ]))
                            .with_checklist([
                                "Call notes saved",
                                "Proposal sent within 24 hours",
                            ]),
                    ),
                ),
        )
}

fn delivery() -> Tab {
    Tab::new("delivery", "Delivery")
        .with_icon("🚚")
        .with_intro("Ship reliable automations and keep them running.")
        .with_topic(
            TopicSection::new("implementation", "Implementation", ColorTag::Blue)
                .with_icon("🛠️")
                .with_description("Build, test, and hand over with documentation.")
                .with_overlay(
                    OverlayContent::new("Implementation Guide")
                        .with_section(
                            OverlaySection::new("Build safely", ColorTag::Blue)
                                .with_block(ContentBlock::bullets([
                                    "Build in a sandbox copy of the client's accounts",
                                    "Log every run to a spreadsheet",
                                    "Alert on failures by email",
                                ])),
                        )
                        .with_section(
                            OverlaySection::new("Hand over", ColorTag::Green)
                                .with_block(ContentBlock::paragraph(
                                    "Record a short walkthrough video and a one-page runbook \
                                     covering what each automation does and how to pause it.",
                                ))
                                .with_resource("Loom", "https://www.loom.com")
                                .with_checklist([
                                    "Runbook delivered",
                                    "Walkthrough recorded",
                                    "Client sign-off received",
                                ]),
                        ),
                ),
        )
        .with_topic(
            TopicSection::new("retainers", "Retainers", ColorTag::Red)
                .with_icon("🔁")
                .with_description("Recurring revenue from monitoring and improvements.")
                .with_overlay(
                    OverlayContent::new("Retainer Guide").with_section(
                        OverlaySection::new("What the retainer covers", ColorTag::Red)
                            .with_block(ContentBlock::bullets([
                                "Monitoring and fixing broken runs",
                                "API and platform changes",
                                "One small improvement per month",
                            ]))
                            .with_block(ContentBlock::tip(
                                "Report monthly",
                                "Send hours saved and errors avoided every month so the value \
                                 stays visible.",
                            )),
                    ),
                ),
        )
}
