/// Bundled demo dataset: four regions over three months.
pub const SAMPLE_CSV: &str = "Region,Month,Revenue,Customers,Profit,Orders
North,Jan,120000,320,30000,410
North,Feb,135000,340,34000,445
North,Mar,142000,355,36500,462
South,Jan,95000,280,21000,330
South,Feb,99000,295,22500,341
South,Mar,105000,310,24800,356
East,Jan,88000,250,19500,300
East,Feb,92000,262,20700,315
East,Mar,97000,270,22100,326
West,Jan,78000,220,16800,260
West,Feb,82000,230,17900,272
West,Mar,91000,245,20300,290";

pub const SAMPLE_PROMPT: &str = "Show revenue by region.";
