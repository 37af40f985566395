//! Alias lists for identity fields shared by every category.

use super::Aliases;

pub const NODE_NAME: Aliases = &[
    "Node Name",
    "NodeName",
    "node_name",
    "NodeDesc",
    "Node Description",
];

pub const NODE_GUID: Aliases = &[
    "NodeGUID",
    "Node GUID",
    "NodeGuid",
    "node_guid",
    "GUID",
];

pub const PORT_NUMBER: Aliases = &[
    "PortNumber",
    "Port Number",
    "PortNum",
    "Port",
    "port_number",
];

/// Generic categorical severity column used by several tables.
pub const SEVERITY: Aliases = &[
    "Severity",
    "severity",
    "Level",
    "level",
    "Event Severity",
];
