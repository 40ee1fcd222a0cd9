//! Default resolution and active-override reconciliation
//!
//! A (tier, data center) scope applies to a viewing context when each
//! component equals the context's or is the "Any" wildcard. Among applicable
//! scopes the most specific wins; tier is the more significant component.

use crate::contract::{
    DataCenter, DefaultValue, Setting, SettingDefinition, SettingOverride, SettingValue, Tier,
    ViewContext,
};

/// Whether a (tier, data center) scope applies to the context.
pub fn applies(tier: &Tier, data_center: &DataCenter, ctx: &ViewContext) -> bool {
    (tier.is_any() || *tier == ctx.tier)
        && (data_center.is_any() || *data_center == ctx.data_center)
}

/// Specificity rank of a scope. Exact tier outranks wildcard tier, then
/// exact data center outranks wildcard data center.
pub fn specificity(tier: &Tier, data_center: &DataCenter) -> u8 {
    let mut rank = 0;
    if !tier.is_any() {
        rank += 2;
    }
    if !data_center.is_any() {
        rank += 1;
    }
    rank
}

/// Most specific default applying to the context.
///
/// Total for catalog-validated definitions: the (Any, Any) base default is
/// required at load time.
pub fn resolve_default<'a>(
    definition: &'a SettingDefinition,
    ctx: &ViewContext,
) -> Option<&'a DefaultValue> {
    definition
        .defaults
        .iter()
        .filter(|d| applies(&d.tier, &d.data_center, ctx))
        .max_by_key(|d| specificity(&d.tier, &d.data_center))
}

/// The override in effect for the context: the most specific applicable one.
///
/// At most one override applies at any specificity rank because the store
/// keys on (setting, tier, data center).
pub fn active_override<'a>(
    overrides: &'a [SettingOverride],
    ctx: &ViewContext,
) -> Option<&'a SettingOverride> {
    overrides
        .iter()
        .filter(|o| applies(&o.tier, &o.data_center, ctx))
        .max_by_key(|o| specificity(&o.tier, &o.data_center))
}

/// Override permission for a data center, falling back to the "Any" entry.
/// A setting with no matching entry allows overrides.
pub fn allows_override(definition: &SettingDefinition, data_center: &DataCenter) -> bool {
    definition
        .allows_overrides
        .get(data_center)
        .or_else(|| definition.allows_overrides.get(&DataCenter::any()))
        .copied()
        .unwrap_or(true)
}

/// Assemble the setting view for a context: one materialized default per
/// available data center, every stored override, and the active override.
pub fn assemble(
    definition: &SettingDefinition,
    overrides: &[SettingOverride],
    ctx: &ViewContext,
    available_data_centers: &[DataCenter],
) -> Setting {
    let defaults = available_data_centers
        .iter()
        .map(|dc| {
            let scoped = ViewContext {
                tier: ctx.tier.clone(),
                data_center: dc.clone(),
            };
            let value = resolve_default(definition, &scoped)
                .map(|d| d.value.clone())
                .unwrap_or_default();
            SettingValue {
                tier: ctx.tier.clone(),
                data_center: dc.clone(),
                value,
                is_default: true,
                is_override: false,
                allows_overrides: allows_override(definition, dc),
            }
        })
        .collect();

    let override_values = overrides
        .iter()
        .map(|o| SettingValue {
            tier: o.tier.clone(),
            data_center: o.data_center.clone(),
            value: o.value.clone(),
            is_default: false,
            is_override: true,
            allows_overrides: allows_override(definition, &o.data_center),
        })
        .collect();

    let active = active_override(overrides, ctx).map(|o| SettingValue {
        tier: o.tier.clone(),
        data_center: o.data_center.clone(),
        value: o.value.clone(),
        is_default: false,
        is_override: true,
        allows_overrides: allows_override(definition, &o.data_center),
    });

    let allows = available_data_centers
        .iter()
        .map(|dc| (dc.clone(), allows_override(definition, dc)))
        .collect();

    Setting {
        name: definition.name.clone(),
        description: definition.description.clone(),
        type_name: definition.type_name.clone(),
        is_enum: definition.is_enum(),
        requires_restart: definition.requires_restart,
        allows_overrides: allows,
        defaults,
        overrides: override_values,
        active_override: active,
        enum_names: definition.enum_names.clone(),
    }
}
