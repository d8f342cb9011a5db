use crate::infra::load_catalog_from_path;
use clap::Args;
use realty_core::error::AppError;
use realty_core::finance::{
    amortization_schedule, compute_affordability, compute_emi, compute_stamp_duty, format_inr,
    AffordabilityInputs, BuyerGender, PropertyUse,
};
use realty_core::listings::{
    sort_properties, BhkFilter, FilterCriteria, FurnishingFilter, ListingIntent, Property,
    PropertyKind, SortOrder,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Listing catalog export (.csv or .json)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Category to search: Residential, Commercial, Plots, PG or Projects
    #[arg(long, default_value = "Residential")]
    pub(crate) kind: PropertyKind,
    /// Buyer intent: any, buy, sell or rent
    #[arg(long, default_value = "any")]
    pub(crate) listing: ListingIntent,
    /// Case-insensitive text matched against location, type and building name
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Bedrooms: any, an exact count, or 5 for five and above
    #[arg(long, default_value = "any")]
    pub(crate) bhk: BhkFilter,
    /// Furnishing: any, unfurnished, semi-furnished or furnished
    #[arg(long, default_value = "any")]
    pub(crate) furnishing: FurnishingFilter,
    /// Minimum price in rupees (inclusive)
    #[arg(long)]
    pub(crate) min_price: Option<u64>,
    /// Maximum price in rupees (inclusive)
    #[arg(long)]
    pub(crate) max_price: Option<u64>,
    /// Result ordering: relevance, price-asc, price-desc or newest
    #[arg(long, default_value = "relevance")]
    pub(crate) sort: SortOrder,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::for_kind(self.kind)
            .with_listing(self.listing)
            .with_search(self.query.clone().unwrap_or_default())
            .with_bhk(self.bhk)
            .with_furnishing(self.furnishing)
            .with_price_range(self.min_price, self.max_price)
    }
}

#[derive(Args, Debug)]
pub(crate) struct EmiArgs {
    /// Loan amount in rupees
    #[arg(long)]
    pub(crate) principal: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Tenure in years
    #[arg(long)]
    pub(crate) years: u32,
    /// Print a year-by-year amortization schedule
    #[arg(long)]
    pub(crate) schedule: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AffordArgs {
    /// Monthly take-home income in rupees
    #[arg(long)]
    pub(crate) income: f64,
    /// Monthly household expenses in rupees
    #[arg(long)]
    pub(crate) expenses: f64,
    /// Installments already being paid each month
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_emi: f64,
    /// Cash available for the down payment
    #[arg(long, default_value_t = 0.0)]
    pub(crate) down_payment: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Tenure in years
    #[arg(long)]
    pub(crate) years: u32,
}

#[derive(Args, Debug)]
pub(crate) struct StampDutyArgs {
    /// Property value in rupees
    #[arg(long)]
    pub(crate) value: f64,
    /// State, e.g. andhra_pradesh
    #[arg(long)]
    pub(crate) state: String,
    /// residential or commercial
    #[arg(long = "use", default_value = "residential")]
    pub(crate) property_use: PropertyUse,
    /// male, female or other
    #[arg(long, default_value = "male")]
    pub(crate) gender: BuyerGender,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let catalog = load_catalog_from_path(&args.catalog)?;
    let criteria = args.criteria();
    let mut results = catalog.search(&criteria);
    sort_properties(&mut results, args.sort);

    println!(
        "{} of {} listings match ({} / {:?})",
        results.len(),
        catalog.len(),
        criteria.property_type,
        criteria.listing_type
    );
    for property in &results {
        println!("- {}", describe(property));
    }

    Ok(())
}

fn describe(property: &Property) -> String {
    let mut line = format!(
        "#{} {} | {} | {}",
        property.id,
        property.type_label,
        property.location,
        format_inr(i64::try_from(property.price_value).unwrap_or(i64::MAX))
    );
    if property.bhk > 0 {
        line.push_str(&format!(" | {} BHK", property.bhk));
    }
    if let Some(furnishing) = property.furnishing {
        line.push_str(&format!(" | {furnishing}"));
    }
    if let Some(building) = &property.building_name {
        line.push_str(&format!(" | {building}"));
    }
    if property.is_featured {
        line.push_str(" | featured");
    }
    line
}

pub(crate) fn run_emi(args: EmiArgs) -> Result<(), AppError> {
    let quote = compute_emi(args.principal, args.rate, args.years)?;

    println!("Monthly EMI: {}", format_inr(quote.emi));
    println!("Principal: {}", format_inr(quote.principal));
    println!("Total interest: {}", format_inr(quote.total_interest));
    println!("Total payable: {}", format_inr(quote.total_amount));

    if args.schedule {
        println!("\nYear | Principal | Interest | Balance");
        for row in amortization_schedule(args.principal, args.rate, args.years)? {
            println!(
                "{:>4} | {} | {} | {}",
                row.year,
                format_inr(row.principal_paid),
                format_inr(row.interest_paid),
                format_inr(row.closing_balance)
            );
        }
    }

    Ok(())
}

pub(crate) fn run_affordability(args: AffordArgs) -> Result<(), AppError> {
    let quote = compute_affordability(&AffordabilityInputs {
        monthly_income: args.income,
        monthly_expenses: args.expenses,
        existing_emi: args.existing_emi,
        down_payment: args.down_payment,
        annual_rate_percent: args.rate,
        tenure_years: args.years,
    })?;

    println!("Disposable income: {}", format_inr(quote.disposable_income));
    if quote.max_emi <= 0 {
        println!("No room for a new EMI at the current income and expenses.");
        return Ok(());
    }
    println!("Affordable EMI: {}", format_inr(quote.max_emi));
    println!("Maximum loan: {}", format_inr(quote.max_loan));
    println!(
        "Maximum property value: {}",
        format_inr(quote.max_property_value)
    );

    Ok(())
}

pub(crate) fn run_stamp_duty(args: StampDutyArgs) -> Result<(), AppError> {
    let quote = compute_stamp_duty(args.value, &args.state, args.property_use, args.gender)?;

    if !quote.rates_known {
        println!(
            "No stamp duty rates on file for '{}'; amounts below are zero.",
            args.state
        );
    }
    println!(
        "Stamp duty ({:.1}%): {}",
        quote.stamp_duty_rate * 100.0,
        format_inr(quote.stamp_duty)
    );
    println!(
        "Registration ({:.1}%): {}",
        quote.registration_rate * 100.0,
        format_inr(quote.registration)
    );
    println!("Total: {}", format_inr(quote.total));

    Ok(())
}
