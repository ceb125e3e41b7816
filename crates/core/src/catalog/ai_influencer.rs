use crate::color::ColorTag;
use crate::model::{ContentBlock, OverlayContent, OverlaySection, Page, Tab, TopicSection};

use super::slugs;

pub(super) fn page() -> Page {
    Page::new(slugs::AI_INFLUENCER, "AI Influencer")
        .with_tagline("Design a virtual persona, then let automation keep it posting.")
        .with_tab(character_creation())
        .with_tab(content_automation())
}

fn character_creation() -> Tab {
    Tab::new("character-creation", "Character Creation")
        .with_icon("🧬")
        .with_intro("Pick a niche with real demand, then build a character people want to follow.")
        .with_topic(niche_research())
        .with_topic(persona_design())
        .with_topic(visual_identity())
}

fn niche_research() -> TopicSection {
    TopicSection::new("niche-research", "Niche Research", ColorTag::Blue)
        .with_icon("🔎")
        .with_description("Find an audience that is large, underserved, and willing to buy.")
        .with_overlay(
            OverlayContent::new("Niche Research Guide")
                .with_description("Validate demand before you generate a single image.")
                .with_section(
                    OverlaySection::new("Map the landscape", ColorTag::Blue)
                        .with_block(ContentBlock::paragraph(
                            "Start from topics you can post about daily for a year. Fitness, travel, \
                             fashion, and tech reviews all support virtual creators well.",
                        ))
                        .with_block(ContentBlock::bullets([
                            "List ten candidate niches",
                            "Note the top five accounts in each",
                            "Record their follower counts and posting cadence",
                        ]))
                        .with_resource("Google Trends", "https://trends.google.com")
                        .with_resource("Exploding Topics", "https://explodingtopics.com"),
                )
                .with_section(
                    OverlaySection::new("Score each niche", ColorTag::Green)
                        .with_block(ContentBlock::steps([
                            "Search volume: is interest growing year over year?",
                            "Competition: are the leaders beatable on consistency?",
                            "Monetization: are there brands paying creators here?",
                        ]))
                        .with_block(ContentBlock::tip(
                            "Rule of thumb",
                            "Pick the niche where you can name three sponsors today.",
                        ))
                        .with_checklist([
                            "Shortlist three niches",
                            "Score each on demand, competition, and money",
                            "Commit to one niche for ninety days",
                        ]),
                ),
        )
}

fn persona_design() -> TopicSection {
    TopicSection::new("persona-design", "Persona Design", ColorTag::Purple)
        .with_icon("🎭")
        .with_description("Give your character a backstory, a voice, and opinions.")
        .with_overlay(
            OverlayContent::new("Persona Design Guide")
                .with_section(
                    OverlaySection::new("Backstory", ColorTag::Purple)
                        .with_block(ContentBlock::paragraph(
                            "Followers attach to people, not feeds. Write a one-page biography: \
                             age, home city, job, and the reason they started posting.",
                        ))
                        .with_block(ContentBlock::bullets([
                            "Three personality traits",
                            "Two strong opinions about the niche",
                            "One recurring struggle the audience shares",
                        ])),
                )
                .with_section(
                    OverlaySection::new("Voice", ColorTag::Yellow)
                        .with_block(ContentBlock::subheading("Write a style sheet"))
                        .with_block(ContentBlock::paragraph(
                            "Decide on vocabulary, emoji use, sentence length, and the words the \
                             character would never say. Feed the sheet to every caption prompt.",
                        ))
                        .with_checklist([
                            "Biography written",
                            "Voice style sheet saved",
                            "Ten sample captions approved",
                        ]),
                ),
        )
}

fn visual_identity() -> TopicSection {
    TopicSection::new("visual-identity", "Visual Identity", ColorTag::Orange)
        .with_icon("🎨")
        .with_description("Generate a face and style that stay consistent across every post.")
        .with_overlay(
            OverlayContent::new("Visual Identity Guide")
                .with_description("Consistency is what makes a generated face feel real.")
                .with_section(
                    OverlaySection::new("Lock the face", ColorTag::Orange)
                        .with_block(ContentBlock::steps([
                            "Generate fifty candidate portraits",
                            "Pick one and build a reference sheet from several angles",
                            "Train a character model on the reference sheet",
                        ]))
                        .with_resource("Leonardo AI", "https://leonardo.ai")
                        .with_resource("Midjourney", "https://www.midjourney.com"),
                )
                .with_section(
                    OverlaySection::new("Define the look", ColorTag::Red)
                        .with_block(ContentBlock::bullets([
                            "Signature color palette",
                            "Two or three recurring outfits",
                            "Preferred locations and lighting",
                        ]))
                        .with_checklist([
                            "Reference sheet exported",
                            "Character model trained",
                            "Brand palette documented",
                        ]),
                ),
        )
}

fn content_automation() -> Tab {
    Tab::new("content-automation", "Content Automation")
        .with_icon("⚙️")
        .with_intro("Turn the persona into a content machine that posts while you sleep.")
        .with_topic(content_pipeline())
        .with_topic(posting_schedule())
        .with_topic(monetization())
}

fn content_pipeline() -> TopicSection {
    TopicSection::new("content-pipeline", "Content Pipeline", ColorTag::Green)
        .with_icon("🏭")
        .with_description("Batch ideas, images, and captions in one weekly session.")
        .with_overlay(
            OverlayContent::new("Content Pipeline Guide")
                .with_section(
                    OverlaySection::new("Weekly batch", ColorTag::Green)
                        .with_block(ContentBlock::steps([
                            "Generate twenty post ideas from trending topics",
                            "Render images with the trained character model",
                            "Write captions with the voice style sheet",
                            "Queue everything in the scheduler",
                        ]))
                        .with_resource("Make", "https://www.make.com")
                        .with_resource("Zapier", "https://zapier.com"),
                )
                .with_section(
                    OverlaySection::new("Quality gate", ColorTag::Yellow)
                        .with_block(ContentBlock::tip(
                            "Check hands and text",
                            "Generated hands and signage are the fastest giveaway. Review both \
                             before anything is queued.",
                        ))
                        .with_checklist([
                            "Every image reviewed at full size",
                            "Captions read aloud once",
                            "Hashtags refreshed for the week",
                        ]),
                ),
        )
}

fn posting_schedule() -> TopicSection {
    TopicSection::new("posting-schedule", "Posting Schedule", ColorTag::Blue)
        .with_icon("📅")
        .with_description("Post at the hours your audience is awake and scrolling.")
        .with_overlay(
            OverlayContent::new("Posting Schedule Guide").with_section(
                OverlaySection::new("Cadence", ColorTag::Blue)
                    .with_block(ContentBlock::bullets([
                        "Feed: one post per day",
                        "Stories: three to five per day",
                        "Short video: four per week",
                    ]))
                    .with_block(ContentBlock::paragraph(
                        "Use platform analytics after the first month to move slots toward the \
                         hours with the highest reach.",
                    ))
                    .with_resource("Buffer", "https://buffer.com")
                    .with_resource("Later", "https://later.com"),
            ),
        )
}

fn monetization() -> TopicSection {
    TopicSection::new("monetization", "Monetization", ColorTag::Red)
        .with_icon("💰")
        .with_description("Brand deals, affiliate links, and premium content.")
        .with_overlay(
            OverlayContent::new("Monetization Guide")
                .with_description("Start earning once engagement is stable, not before.")
                .with_section(
                    OverlaySection::new("Revenue streams", ColorTag::Red)
                        .with_block(ContentBlock::bullets([
                            "Affiliate links in bio and stories",
                            "Sponsored posts from niche brands",
                            "Subscription content for superfans",
                        ])),
                )
                .with_section(
                    OverlaySection::new("Pitching brands", ColorTag::Purple)
                        .with_block(ContentBlock::steps([
                            "Build a one-page media kit",
                            "List twenty brands already paying creators in the niche",
                            "Send short pitches with one concrete post idea each",
                        ]))
                        .with_checklist([
                            "Media kit published",
                            "Affiliate accounts approved",
                            "First five pitches sent",
                        ]),
                ),
        )
}
