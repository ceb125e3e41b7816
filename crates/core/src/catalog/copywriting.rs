use crate::color::ColorTag;
use crate::model::{ContentBlock, OverlayContent, OverlaySection, Page, Tab, TopicSection};

use super::slugs;

pub(super) fn page() -> Page {
    Page::new(slugs::COPYWRITING, "Copywriting")
        .with_tagline("Words that sell, and a freelance business built on them.")
        .with_tab(fundamentals())
        .with_tab(freelancing())
}

fn fundamentals() -> Tab {
    Tab::new("fundamentals", "Fundamentals")
        .with_icon("✍️")
        .with_intro("Learn the frameworks, then practice on real products.")
        .with_topic(
            TopicSection::new("frameworks", "Copy Frameworks", ColorTag::Blue)
                .with_icon("🧩")
                .with_description("AIDA, PAS, and the structures behind persuasive copy.")
                .with_overlay(
                    OverlayContent::new("Copy Frameworks Guide")
                        .with_section(
                            OverlaySection::new("AIDA", ColorTag::Blue)
                                .with_block(ContentBlock::steps([
                                    "Attention: a headline that stops the scroll",
                                    "Interest: a fact or story that earns the next line",
                                    "Desire: the outcome the reader wants",
                                    "Action: one clear next step",
                                ])),
                        )
                        .with_section(
                            OverlaySection::new("PAS", ColorTag::Red)
                                .with_block(ContentBlock::steps([
                                    "Problem: name the pain precisely",
                                    "Agitate: show what it costs",
                                    "Solution: present the offer as the relief",
                                ]))
                                .with_block(ContentBlock::tip(
                                    "Practice",
                                    "Rewrite one ad a day in both frameworks and compare.",
                                ))
                                .with_checklist([
                                    "Ten ads rewritten with AIDA",
                                    "Ten ads rewritten with PAS",
                                ]),
                        ),
                ),
        )
        .with_topic(
            TopicSection::new("headlines", "Headlines", ColorTag::Yellow)
                .with_icon("📰")
                .with_description("Most readers only see the headline. Make it count.")
                .with_overlay(
                    OverlayContent::new("Headline Guide").with_section(
                        OverlaySection::new("Patterns that work", ColorTag::Yellow)
                            .with_block(ContentBlock::bullets([
                                "How to get a result without a common pain",
                                "A number plus a specific promise",
                                "A question the reader is already asking",
                            ]))
                            .with_resource("Swipe File", "https://swipefile.com"),
                    ),
                ),
        )
        .with_topic(
            TopicSection::new("ai-assisted-writing", "AI-Assisted Writing", ColorTag::Purple)
                .with_icon("🤖")
                .with_description("Use language models for drafts, never for the final voice.")
                .with_overlay(
                    OverlayContent::new("AI-Assisted Writing Guide")
                        .with_description("The model drafts; you edit.")
                        .with_section(
                            OverlaySection::new("Workflow", ColorTag::Purple)
                                .with_block(ContentBlock::steps([
                                    "Write the brief yourself: audience, offer, proof",
                                    "Ask for ten variations of each section",
                                    "Keep the best lines and rewrite the rest by hand",
                                ]))
                                .with_checklist([
                                    "Brief template saved",
                                    "Prompt library started",
                                ]),
                        ),
                ),
        )
}

fn freelancing() -> Tab {
    Tab::new("freelancing", "Freelancing")
        .with_icon("💼")
        .with_intro("Build a portfolio, find clients, and raise your rates.")
        .with_topic(
            TopicSection::new("portfolio", "Portfolio", ColorTag::Green)
                .with_icon("📁")
                .with_description("Sample work that proves you can write for a real market.")
                .with_overlay(
                    OverlayContent::new("Portfolio Guide").with_section(
                        OverlaySection::new("Sample pieces", ColorTag::Green)
                            .with_block(ContentBlock::bullets([
                                "One sales page",
                                "One email sequence of five emails",
                                "Three ads for a single product",
                            ]))
                            .with_resource("Notion", "https://www.notion.so")
                            .with_checklist([
                                "Three sample pieces finished",
                                "Portfolio page live",
                            ]),
                    ),
                ),
        )
        .with_topic(
            TopicSection::new("finding-clients", "Finding Clients", ColorTag::Orange)
                .with_icon("🎯")
                .with_description("Where small businesses look for writers.")
                .with_overlay(
                    OverlayContent::new("Finding Clients Guide")
                        .with_section(
                            OverlaySection::new("Channels", ColorTag::Orange)
                                .with_block(ContentBlock::bullets([
                                    "Freelance marketplaces for the first reviews",
                                    "Direct outreach to businesses with weak websites",
                                    "Referrals from designers and developers",
                                ]))
                                .with_resource("Upwork", "https://www.upwork.com")
                                .with_resource("Contra", "https://contra.com"),
                        )
                        .with_section(
                            OverlaySection::new("Pricing", ColorTag::Red)
                                .with_block(ContentBlock::paragraph(
                                    "Quote per project, not per hour. Raise rates after every \
                                     three clients until one in three says no.",
                                ))
                                .with_checklist([
                                    "Project price sheet written",
                                    "First three clients closed",
                                ]),
                        ),
                ),
        )
}
