use std::sync::Arc;

use clap::Args;
use loan_advisor::advisor::{
    recommend, LoanAdvisorService, LoanNeedInput, LoanPurpose, LoanRecommendation, SampleLanguage,
};
use loan_advisor::config::AppConfig;
use loan_advisor::error::AppError;
use tracing::info;

use crate::infra::{parse_purpose, parse_sample_language, ConsoleSynthesizer};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Stated purpose of the loan (education, home_purchase, home_rent,
    /// business, vehicle, medical, debt_consolidation, other)
    #[arg(long, value_parser = parse_purpose)]
    pub(crate) purpose: LoanPurpose,
    /// Requested amount (currency-unit-less)
    #[arg(long)]
    pub(crate) amount: u64,
    /// Borrower can offer secured assets
    #[arg(long)]
    pub(crate) collateral: bool,
    /// Emit the recommendation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SampleArgs {
    /// Greeting language (en, hi, kn); all three are spoken when omitted
    #[arg(long, value_parser = parse_sample_language)]
    pub(crate) language: Option<SampleLanguage>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Stated purpose for the classification portion of the demo
    #[arg(long, value_parser = parse_purpose)]
    pub(crate) purpose: Option<LoanPurpose>,
    /// Requested amount for the classification portion of the demo
    #[arg(long)]
    pub(crate) amount: Option<u64>,
    /// Borrower can offer secured assets
    #[arg(long)]
    pub(crate) collateral: bool,
    /// User messages to feed through the chat (repeatable)
    #[arg(long = "message")]
    pub(crate) messages: Vec<String>,
    /// Skip speaking the final advisor reply
    #[arg(long)]
    pub(crate) skip_speech: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        purpose,
        amount,
        collateral,
        json,
    } = args;

    let input = LoanNeedInput {
        purpose,
        amount,
        has_collateral: collateral,
    };
    let recommendation = recommend(&input);

    if json {
        let rendered = serde_json::to_string_pretty(&recommendation)
            .map_err(std::io::Error::other)?;
        println!("{rendered}");
    } else {
        render_recommendation(&input, &recommendation);
    }

    Ok(())
}

pub(crate) fn run_sample(args: SampleArgs, config: &AppConfig) -> Result<(), AppError> {
    let synthesizer = Arc::new(ConsoleSynthesizer);
    let service = LoanAdvisorService::new(synthesizer, config.speech.clone());

    let languages: Vec<SampleLanguage> = match args.language {
        Some(language) => vec![language],
        None => SampleLanguage::ALL.to_vec(),
    };

    for language in languages {
        let request = service.speak_sample(language)?;
        info!(language = language.as_str(), voice = %request.language, "sample greeting spoken");
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        purpose,
        amount,
        collateral,
        messages,
        skip_speech,
    } = args;

    let synthesizer = Arc::new(ConsoleSynthesizer);
    let mut service = LoanAdvisorService::new(synthesizer, config.speech.clone());

    let messages = if messages.is_empty() {
        vec![
            "Hi, I need help choosing a loan.".to_string(),
            "What are my options?".to_string(),
        ]
    } else {
        messages
    };

    println!("Loan advisory demo");
    for text in &messages {
        service.send_message(text)?;
    }

    let input = LoanNeedInput {
        purpose: purpose.unwrap_or(LoanPurpose::Other),
        amount: amount.unwrap_or(60_000),
        has_collateral: collateral,
    };
    let recommendation = service.recommend(&input);
    info!(reason_key = recommendation.reason_key.as_str(), "need classified");

    println!("\nTranscript");
    for message in service.conversation().messages() {
        println!(
            "- [{}] {} ({})",
            message.sender.label(),
            message.text,
            message.sent_at.format("%H:%M:%S")
        );
    }

    println!();
    render_recommendation(&input, &recommendation);

    if !skip_speech {
        println!();
        service.speak_last_reply()?;
    }

    Ok(())
}

fn render_recommendation(input: &LoanNeedInput, recommendation: &LoanRecommendation) {
    println!(
        "Need: purpose {}, amount {}, collateral {}",
        input.purpose.as_str(),
        input.amount,
        if input.has_collateral { "yes" } else { "no" }
    );
    println!("Recommended product: {}", recommendation.loan_type);
    if let Some(subtype) = &recommendation.subtype {
        println!("Subtype: {subtype}");
    }
    println!("Reason: {}", recommendation.reason_key.as_str());
}
