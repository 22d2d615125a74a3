//! The sensor table.
//!
//! Declaration order is the default order sensors are listed in the dashboard.
//! Arrays: `dallas_temp`/`dallas_temp_id` carry up to four probes, `doors_open`
//! and `axl_load` carry one entry per door/axle, the `driver_*` sensors carry
//! one entry per tachograph driver slot. `pp_idling` is added by the
//! post-processing services rather than reported by the unit.

use crate::descriptor::{
    Category, ChartType, FormatKind, GpsField, SensorDescriptor, Source, Unit, Unverified,
};

pub(crate) static SENSORS: &[SensorDescriptor] = &[
    SensorDescriptor {
        key: "gps.satellites",
        label: "GPS Satellites",
        format: FormatKind::Plain,
        source: Source::Gps(GpsField::Satellites),
        chart_type: Some(ChartType::Line),
        category: Category::Gps,
        unverified: &[],
    },
    SensorDescriptor {
        key: "gps.speed",
        label: "GPS Speed",
        format: FormatKind::Unit(Unit::KmPerHour),
        source: Source::Gps(GpsField::Speed),
        chart_type: Some(ChartType::Line),
        category: Category::Gps,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ignition",
        label: "Ignition",
        format: FormatKind::Ignition,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ebat_volts",
        label: "Ext. Batt",
        format: FormatKind::Unit(Unit::Volt),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ibat_volts",
        label: "Int. Batt",
        format: FormatKind::Unit(Unit::Volt),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ibutton",
        label: "IButton",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Driver,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_consumed",
        label: "Fuel Consumed",
        format: FormatKind::Unit(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eng_work_time",
        label: "Eng. Work time",
        format: FormatKind::Duration,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eng_load_perc",
        label: "Eng. Load Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tach_tot_dist_km",
        label: "Tacho Tot. Dist.",
        format: FormatKind::Unit(Unit::Km),
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eco_score",
        label: "Eco score",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "speed",
        label: "Speed",
        format: FormatKind::Unit(Unit::KmPerHour),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ibat_amps",
        label: "Int. Batt Amps",
        format: FormatKind::Unit(Unit::Ampere),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "lvcan_speed",
        label: "LVCAN Speed",
        format: FormatKind::Unit(Unit::KmPerHour),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "acc_pedal_pos",
        label: "Acc Pedal Position",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_lvl",
        label: "Fuel Level",
        format: FormatKind::Unit(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eng_rpm",
        label: "Eng. RPM",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tot_mileage_km",
        label: "Total Mileage",
        format: FormatKind::Unit(Unit::Km),
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_level_perc",
        label: "Fuel Level Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eng_temp",
        label: "Eng. Temperature",
        format: FormatKind::Unit(Unit::Celsius),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "trip_odo",
        label: "Trip Odometer",
        format: FormatKind::Unit(Unit::Km),
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "movement",
        label: "Movement",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "prog_number",
        label: "Program Number",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "module_id",
        label: "Module ID",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eng_total_time",
        label: "Eng. Total Time",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Engine,
        unverified: &[Unverified::Format],
    },
    SensorDescriptor {
        key: "tot_mileage_cnt",
        label: "Total Mileage Count",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[Unverified::Format],
    },
    SensorDescriptor {
        key: "fuel_consumed_cnt",
        label: "Fuel Consumed Count",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_rate",
        label: "Fuel Rate",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "adblue_lvl_perc",
        label: "AdBlue Level Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Adblue,
        unverified: &[],
    },
    SensorDescriptor {
        key: "adblue_lvl",
        label: "AdBlue Level",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Adblue,
        unverified: &[],
    },
    SensorDescriptor {
        key: "cont_state_flag",
        label: "Control State Flags",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "agri_mach_flags",
        label: "Agricultural Machinery Flags",
        format: FormatKind::Hex,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "harvesting_time",
        label: "Harvesting Time",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "area_of_harvest",
        label: "Area Of Harvest",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "mowing_eff",
        label: "Mowing Efficiency",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "grain_mown_vol",
        label: "Grain Mow Volume",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "grain_moist_perc",
        label: "Grain Moisture",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "harv_drum_rpm",
        label: "Harvesting Drum RPM",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "harv_drum_gap",
        label: "Gap Under Harvesting Drum",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Agricultural,
        unverified: &[],
    },
    SensorDescriptor {
        key: "sec_state_flags",
        label: "Security State Flags",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "trip_dist_km",
        label: "Trip Distance",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tach_veh_speed",
        label: "Tacho Vehicle Speed",
        format: FormatKind::Unit(Unit::KmPerHour),
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tach_driv_card",
        label: "Tacho Driver Card Presence",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Driver,
        unverified: &[],
    },
    SensorDescriptor {
        key: "bat_temp",
        label: "Battery Temperature",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "bat_lvl_perc",
        label: "Battery Level Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "dtc_faults",
        label: "DTC Faults Count",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "slope_of_arm",
        label: "Slope of Arm",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "rot_of_arm",
        label: "Rotation of Arm",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eject_of_arm",
        label: "Eject of Arm",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "hrz_dist_arm",
        label: "Horizontal Distance Arm",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "height_of_arm",
        label: "Height Arm Above Ground",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "drill_rpm",
        label: "Drill RPM",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "salt_spread",
        label: "Spread Salt",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "bat_volts",
        label: "Battery Voltage",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fine_salt_spread",
        label: "Spread Fine Grained Salt",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "coarse_salt",
        label: "Coarse Grained Salt",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "spread_dimix",
        label: "Spread DiMix",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "coarse_cal_spread",
        label: "Spread Coarse Grained Calcium",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "sod_chlor_spread",
        label: "Spread Sodium Chloride",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "cal_chlor_spread",
        label: "Spread Calcium Chloride",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "mag_chlor_spread",
        label: "Spread Magnesium Chloride",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "gravel_spread",
        label: "Amount Of Spread Gravel",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "sand_spread",
        label: "Amount Of Spread Sand",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "width_pour_left",
        label: "Width Pouring Left",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "width_pour_right",
        label: "Width Pouring Right",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "salt_work_hr",
        label: "Salt Spreader Working Hours",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "dist_during_salting",
        label: "Distance During Salting",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "load_weight",
        label: "Load Weight",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Industrial,
        unverified: &[],
    },
    SensorDescriptor {
        key: "retard_load_perc",
        label: "Retarder Load",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "cruise_time",
        label: "Cruise Time",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "cng_status",
        label: "CNG Status",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "cng_used",
        label: "CNG Used",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "cng_lvl_perc",
        label: "CNG Level Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "eng_oil_lvl",
        label: "Eng. Oil Level",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "dallas_temp",
        label: "Dallas Temperature",
        format: FormatKind::Tight(Unit::Celsius),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::DallasTemp,
        unverified: &[],
    },
    SensorDescriptor {
        key: "dallas_temp_id",
        label: "Dallas Temperature ID",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DallasTemp,
        unverified: &[],
    },
    SensorDescriptor {
        key: "sleep_mode",
        label: "Sleep Mode",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "doors_open",
        label: "Doors Open",
        format: FormatKind::FirstElement,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "axl_load",
        label: "Axle Load",
        format: FormatKind::FirstElement,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "driver_states",
        label: "Driver State",
        format: FormatKind::DriverStates,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DriverState,
        unverified: &[],
    },
    SensorDescriptor {
        key: "driver_cont_times",
        label: "Continuous Driving Time",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DriverState,
        unverified: &[],
    },
    SensorDescriptor {
        key: "driver_break_times",
        label: "Cumulative Break Time",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DriverState,
        unverified: &[],
    },
    SensorDescriptor {
        key: "driver_act_dur",
        label: "Duration of Selected Activity",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DriverState,
        unverified: &[],
    },
    SensorDescriptor {
        key: "driver_cumu_times",
        label: "Cumulative Driving Time",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DriverState,
        unverified: &[],
    },
    SensorDescriptor {
        key: "driver_ids",
        label: "Driver Id's",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::DriverState,
        unverified: &[],
    },
    SensorDescriptor {
        key: "pp_idling",
        label: "Idling (Detected via Processing)",
        format: FormatKind::YesNo,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "rec_in_flash",
        label: "Rec In Flash",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "ibutton_auth",
        label: "IButton Authorization",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Driver,
        unverified: &[],
    },
    SensorDescriptor {
        key: "sd_present",
        label: "SD Status",
        format: FormatKind::Presence,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_used_gps",
        label: "Fuel Used GPS",
        format: FormatKind::Unit(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_rate_gps",
        label: "Fuel Rate GPS",
        format: FormatKind::Unit(Unit::LitrePer100Km),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "total_odo",
        label: "Total Odometer",
        format: FormatKind::Unit(Unit::Km),
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "accel_x",
        label: "Acceleration X",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "accel_y",
        label: "Acceleration Y",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "accel_z",
        label: "Acceleration Z",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ibat_perc",
        label: "Internal Battery Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "charger_conn",
        label: "Charger Connected",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Values],
    },
    SensorDescriptor {
        key: "rfid",
        label: "RFID",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "user_id",
        label: "User ID",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "obd_accum_mil",
        label: "Accumulative Mileage",
        format: FormatKind::Unit(Unit::Km),
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_inst_fuel",
        label: "Inst Fuel",
        format: FormatKind::Unit(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[Unverified::Label, Unverified::Format],
    },
    SensorDescriptor {
        key: "obd_avg_fuel",
        label: "Average Fuel",
        format: FormatKind::Unit(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[Unverified::Label, Unverified::Format],
    },
    SensorDescriptor {
        key: "obd_drive_time",
        label: "Drive Time",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_speed",
        label: "Speed",
        format: FormatKind::Unit(Unit::KmPerHour),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_power_load",
        label: "Power Load",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_water_temp",
        label: "Water Temperature",
        format: FormatKind::Unit(Unit::Celsius),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_throttle_perc",
        label: "Throttle Percentage",
        format: FormatKind::Unit(Unit::Percent),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_engine_speed",
        label: "Engine Speed",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Engine,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_battery_volts",
        label: "Battery Volts",
        format: FormatKind::Unit(Unit::Volt),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Battery,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_diag_code_01",
        label: "Diagnostic Code 1",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_diag_code_02",
        label: "Diagnostic Code 2",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_diag_code_03",
        label: "Diagnostic Code 3",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "obd_diag_code_04",
        label: "Diagnostic Code 4",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[Unverified::Label],
    },
    SensorDescriptor {
        key: "tpms_device_stat",
        label: "Device Status",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_no_of_wheels",
        label: "Number Of Wheels",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_lf_press",
        label: "Left Front Pressure",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_lf_temp",
        label: "Left Front Temperature",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_lf_state",
        label: "Left Front State",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_rf_press",
        label: "Right Front Pressure",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_rf_temp",
        label: "Right Front Temperature",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_rf_state",
        label: "Right Front State",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_lr_press",
        label: "Left Rear Pressure",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_lr_temp",
        label: "Left Rear Temperature",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_lr_state",
        label: "Left Rear State",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_rr_press",
        label: "Right Rear Pressure",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_rr_temp",
        label: "Right Rear Temperature",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "tpms_rr_state",
        label: "Right Rear State",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "pulse_cnt_din",
        label: "DIN Pulse Counter",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Io,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ble_temp",
        label: "BLE Temperatures",
        format: FormatKind::Tight(Unit::Celsius),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::BleTemperature,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ble_temp_errors",
        label: "BLE Temperatures Errors",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::BleTemperature,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ble_bat_perc",
        label: "BLE Battery Percentage",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::BleBattery,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ble_humidity",
        label: "BLE Humidity",
        format: FormatKind::Tight(Unit::RelativeHumidity),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::BleTemperature,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ble_humidity_errors",
        label: "BLE Humidity Errors",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: None,
        category: Category::BleTemperature,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ble_fuel_level",
        label: "BLE Fuel Level",
        format: FormatKind::Tight(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::BleFuel,
        unverified: &[Unverified::Key],
    },
    SensorDescriptor {
        key: "ble_fuel_freq",
        label: "BLE Fuel Frequency",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::BleFuel,
        unverified: &[Unverified::Key],
    },
    SensorDescriptor {
        key: "ble_luminosity",
        label: "BLE Luminosity",
        format: FormatKind::Raw,
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::BleLuminosity,
        unverified: &[],
    },
    SensorDescriptor {
        key: "lls_fuel",
        label: "LLS Fuel",
        format: FormatKind::Tight(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::LlsFuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "lls_temp",
        label: "LLS Temperature",
        format: FormatKind::Tight(Unit::Celsius),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::LlsTemp,
        unverified: &[],
    },
    SensorDescriptor {
        key: "odometer",
        label: "Odometer",
        format: FormatKind::Unit(Unit::Km),
        source: Source::Sensors,
        chart_type: None,
        category: Category::Odometer,
        unverified: &[],
    },
    SensorDescriptor {
        key: "engine_hours",
        label: "Engine Hours",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Engine,
        unverified: &[],
    },
    SensorDescriptor {
        key: "pulse_counter",
        label: "Pulse Counter",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Io,
        unverified: &[],
    },
    SensorDescriptor {
        key: "adc1",
        label: "ADC1",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Io,
        unverified: &[],
    },
    SensorDescriptor {
        key: "adc2",
        label: "ADC2",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Io,
        unverified: &[],
    },
    SensorDescriptor {
        key: "private_mode",
        label: "Private Mode",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Io,
        unverified: &[],
    },
    SensorDescriptor {
        key: "inside_fences",
        label: "Inside Fences",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "outside_fences",
        label: "Outside Fences",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "fuel_level",
        label: "Fuel Level",
        format: FormatKind::Unit(Unit::Litre),
        source: Source::Sensors,
        chart_type: Some(ChartType::Line),
        category: Category::Fuel,
        unverified: &[],
    },
    SensorDescriptor {
        key: "user_alarms",
        label: "User Alarms",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "gps_mileage",
        label: "GPS Mileage",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::Gps,
        unverified: &[],
    },
    SensorDescriptor {
        key: "operator_no_1",
        label: "Operator No 1",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "operator_no_2",
        label: "Operator No 2",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "temp_01",
        label: "Temperature 1",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
    SensorDescriptor {
        key: "ambient_temp",
        label: "Ambient Temperature",
        format: FormatKind::Plain,
        source: Source::Sensors,
        chart_type: None,
        category: Category::General,
        unverified: &[],
    },
];
