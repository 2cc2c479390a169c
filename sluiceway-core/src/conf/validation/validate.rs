use crate::conf::ConfigError;
use crate::conf::types::{
    BuiltinProcessorKind, KeyProviderConfig, PipelineConfig, ProcessorConfig, TrimBytesConfig,
};
use crate::conf::validation::{ValidationCtx, ValidationErrors};
use crate::property::{AttributeExpression, parse_bool_token, parse_data_size};
use std::collections::HashSet;

/// Static admission check over a parsed pipeline config.
///
/// Everything checkable without a flow file is checked here: boolean tokens,
/// literal size expressions, expression syntax, service fields. Attribute
/// references are admitted as syntax only; their values exist per flow file.
pub fn validate(cfg: &PipelineConfig) -> Result<(), ValidationErrors> {
    let mut ctx = ValidationCtx::default();

    validate_processors(&cfg.processors, &mut ctx);

    if let Some(key_provider) = &cfg.key_provider {
        validate_key_provider(key_provider, &mut ctx);
    }

    ctx.into_result()
}

fn validate_processors(processors: &[ProcessorConfig], ctx: &mut ValidationCtx) {
    let mut seen = HashSet::new();

    for processor in processors {
        if !seen.insert(processor.name.as_str()) {
            ctx.push(ConfigError::DuplicateProcessor {
                name: processor.name.clone(),
            });
        }

        if !processor.enabled {
            continue;
        }

        match processor.kind {
            BuiltinProcessorKind::TrimBytes => validate_trim_bytes(processor, ctx),
        }
    }
}

fn validate_trim_bytes(processor: &ProcessorConfig, ctx: &mut ValidationCtx) {
    let cfg: TrimBytesConfig = match processor.config.clone().try_into() {
        Ok(cfg) => cfg,
        Err(e) => {
            ctx.push(ConfigError::InvalidProcessorConfig {
                processor: processor.name.clone(),
                reason: e.to_string(),
            });
            return;
        }
    };

    // remove_all never defers to an expression: exactly "true" or "false".
    if parse_bool_token(&cfg.remove_all).is_err() {
        ctx.push(ConfigError::InvalidBoolProperty {
            processor: processor.name.clone(),
            property: "remove_all".to_owned(),
            value: cfg.remove_all.clone(),
        });
    }

    validate_offset(processor, "start_offset", &cfg.start_offset, ctx);
    validate_offset(processor, "end_offset", &cfg.end_offset, ctx);
}

fn validate_offset(processor: &ProcessorConfig, property: &str, raw: &str, ctx: &mut ValidationCtx) {
    match AttributeExpression::parse(raw) {
        Err(e) => {
            ctx.push(ConfigError::MalformedExpressionProperty {
                processor: processor.name.clone(),
                property: property.to_owned(),
                reason: e.to_string(),
            });
        }
        Ok(expr) => {
            // Literal offsets are admitted now; deferred expressions can only
            // be resolved against a concrete flow file.
            if let Some(literal) = expr.as_literal() {
                if let Err(e) = parse_data_size(literal) {
                    ctx.push(ConfigError::InvalidSizeProperty {
                        processor: processor.name.clone(),
                        property: property.to_owned(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}

fn validate_key_provider(cfg: &KeyProviderConfig, ctx: &mut ValidationCtx) {
    if cfg.key_field.trim().is_empty() {
        ctx.push(ConfigError::EmptyKeyField);
    }
}
